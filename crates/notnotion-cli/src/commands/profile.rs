//! Profile CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;

use notnotion_core::error::AppError;
use notnotion_entity::profile::Avatar;

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show the display name and avatar source
    Show,
    /// Update the stored profile
    Set {
        /// User-chosen name
        #[arg(short = 'n', long)]
        username: Option<String>,
        /// Image file to embed as avatar
        #[arg(short, long)]
        photo: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct ProfileView {
    display_name: String,
    avatar: String,
}

fn describe(avatar: &Avatar) -> String {
    match avatar {
        Avatar::Embedded(bytes) => format!("embedded image ({} bytes)", bytes.len()),
        Avatar::Remote(url) => url.clone(),
        Avatar::Default => "default".to_string(),
    }
}

/// Execute profile commands
pub async fn execute(
    args: &ProfileArgs,
    state: &AppState,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ProfileCommand::Show => {
            let profile = state.profiles.load_profile().await;
            let view = ProfileView {
                avatar: describe(&profile.avatar),
                display_name: profile.display_name,
            };
            output::print_item(&view, format);
        }
        ProfileCommand::Set { username, photo } => {
            let photo = match photo {
                Some(path) => Some(tokio::fs::read(path).await?),
                None => None,
            };
            state
                .profiles
                .save_profile(username.as_deref(), photo.as_deref())
                .await?;
            output::print_success("Profile saved");
        }
    }

    Ok(())
}

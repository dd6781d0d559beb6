//! CLI command definitions and dispatch.

pub mod event;
pub mod folder;
pub mod note;
pub mod profile;

use clap::{Parser, Subcommand};

use notnotion_core::error::AppError;
use notnotion_core::types::FolderId;

use crate::output::OutputFormat;
use crate::state::AppState;

/// not&notion: folders, notes and calendar events
#[derive(Debug, Parser)]
#[command(name = "notnotion", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Act as this user instead of the configured one
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Note management
    Note(note::NoteArgs),
    /// Calendar events
    Event(event::EventArgs),
    /// User profile
    Profile(profile::ProfileArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, state: &AppState) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, state, self.format).await,
            Commands::Note(args) => note::execute(args, state, self.format).await,
            Commands::Event(args) => event::execute(args, state, self.format).await,
            Commands::Profile(args) => profile::execute(args, state, self.format).await,
        }
    }
}

/// Helper: parse a folder id argument
pub(crate) fn folder_id(raw: &str) -> Result<FolderId, AppError> {
    FolderId::parse(raw)
}

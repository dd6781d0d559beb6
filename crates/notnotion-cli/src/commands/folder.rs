//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use notnotion_core::error::{AppError, ErrorKind};
use notnotion_entity::folder::{Folder, ParentRef};

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List every folder
    List,
    /// List root folders
    Roots,
    /// List the direct children of a folder
    Children {
        /// Parent folder ID
        id: String,
    },
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent: Option<String>,
        /// Category tag
        #[arg(short = 't', long = "type", default_value = "0")]
        folder_type: i32,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Count the direct children of a folder
    Count {
        /// Folder ID
        id: String,
    },
    /// Delete an empty folder, or a whole subtree with --recursive
    Delete {
        /// Folder ID
        id: String,
        /// Also delete every descendant folder and note
        #[arg(short, long)]
        recursive: bool,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Parent
    parent: String,
    /// Type
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    folder_type: i32,
    /// Updated at
    updated_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            parent: f.parent.to_string(),
            folder_type: f.folder_type,
            updated_at: f.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn print_folders(folders: &[Folder], format: OutputFormat) {
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    state: &AppState,
    format: OutputFormat,
) -> Result<(), AppError> {
    let folders = &state.folders;

    match &args.command {
        FolderCommand::List => print_folders(&folders.list_all().await?, format),
        FolderCommand::Roots => print_folders(&folders.list_roots().await?, format),
        FolderCommand::Children { id } => {
            let id = super::folder_id(id)?;
            print_folders(&folders.list_children(Some(&id)).await?, format);
        }
        FolderCommand::Create {
            name,
            parent,
            folder_type,
        } => {
            let parent = parent
                .as_deref()
                .map(super::folder_id)
                .transpose()?;
            let folder = folders
                .create_folder(name, ParentRef::from_option(parent), *folder_type)
                .await?;

            match format {
                OutputFormat::Json => output::print_item(&folder, format),
                OutputFormat::Table => output::print_success(&format!(
                    "Folder '{}' created (id: {})",
                    folder.name, folder.id
                )),
            }
        }
        FolderCommand::Rename { id, name } => {
            let mut folder = folders.get_folder(&super::folder_id(id)?).await?;
            folder.name = name.trim().to_string();
            let folder = folders.update_folder(folder).await?;
            output::print_success(&format!("Folder {} renamed to '{}'", folder.id, folder.name));
        }
        FolderCommand::Count { id } => {
            let count = folders.count_children(&super::folder_id(id)?).await?;
            match format {
                OutputFormat::Json => output::print_item(&serde_json::json!({ "children": count }), format),
                OutputFormat::Table => output::print_kv("Children", &count.to_string()),
            }
        }
        FolderCommand::Delete { id, recursive } => {
            let id = super::folder_id(id)?;
            if *recursive {
                let report = folders
                    .deleter()
                    .spawn_delete_subtree(id.clone())
                    .await
                    .map_err(|_| AppError::internal("Delete task ended without reporting"))??;

                match format {
                    OutputFormat::Json => output::print_item(&report, format),
                    OutputFormat::Table => output::print_success(&format!(
                        "Deleted folder {} ({} folders, {} notes)",
                        id, report.folders_deleted, report.notes_deleted
                    )),
                }
            } else {
                if let Err(e) = folders.delete_folder(&id).await {
                    if e.is(ErrorKind::Conflict) {
                        output::print_warning("Use --recursive to delete a folder with its contents");
                    }
                    return Err(e);
                }
                output::print_success(&format!("Deleted folder {id}"));
            }
        }
    }

    Ok(())
}

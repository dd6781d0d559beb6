//! Note management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use notnotion_core::error::AppError;
use notnotion_core::types::NoteId;
use notnotion_entity::note::Note;
use notnotion_service::NotesAdapter;

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for note commands
#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note subcommand
    #[command(subcommand)]
    pub command: NoteCommand,
}

/// Note subcommands
#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// List the notes of a folder
    List {
        /// Folder ID
        #[arg(long)]
        folder: String,
        /// Only favorite notes
        #[arg(long)]
        favorites: bool,
    },
    /// List every note of every folder
    All,
    /// Add a note to a folder
    Add {
        /// Folder ID
        #[arg(long)]
        folder: String,
        /// Title
        #[arg(short, long)]
        title: String,
        /// Body text
        #[arg(short, long, default_value = "")]
        content: String,
        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
    },
    /// Edit a note
    Update {
        /// Folder ID
        #[arg(long)]
        folder: String,
        /// Note ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New body text
        #[arg(short, long)]
        content: Option<String>,
        /// Favorite flag
        #[arg(long)]
        favorite: Option<bool>,
        /// Cover image URL (empty to remove)
        #[arg(long)]
        cover: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Folder ID
        #[arg(long)]
        folder: String,
        /// Note ID
        id: String,
    },
    /// Show the notes whose title contains the query
    Search {
        /// Case-insensitive title substring
        query: String,
        /// Restrict to one folder
        #[arg(long)]
        folder: Option<String>,
    },
}

/// Note display row
#[derive(Debug, Serialize, Tabled)]
struct NoteRow {
    /// Note ID
    id: String,
    /// Folder ID
    folder: String,
    /// Title
    title: String,
    /// Favorite
    favorite: bool,
    /// Updated at
    updated_at: String,
}

impl From<&Note> for NoteRow {
    fn from(n: &Note) -> Self {
        Self {
            id: n.id.to_string(),
            folder: n.folder_id.to_string(),
            title: n.title.clone(),
            favorite: n.is_favorite,
            updated_at: n.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Search result row
#[derive(Debug, Serialize, Tabled)]
struct CardRow {
    /// Title
    title: String,
    /// Cover
    cover: String,
}

fn print_notes(notes: &[Note], format: OutputFormat) {
    let rows: Vec<NoteRow> = notes.iter().map(NoteRow::from).collect();
    output::print_list(&rows, format);
}

/// Execute note commands
pub async fn execute(
    args: &NoteArgs,
    state: &AppState,
    format: OutputFormat,
) -> Result<(), AppError> {
    let notes = &state.notes;

    match &args.command {
        NoteCommand::List { folder, favorites } => {
            let folder = super::folder_id(folder)?;
            let listed = if *favorites {
                notes.list_favorites(&folder).await?
            } else {
                notes.list_by_folder(&folder).await?
            };
            print_notes(&listed, format);
        }
        NoteCommand::All => print_notes(&notes.list_all().await?, format),
        NoteCommand::Add {
            folder,
            title,
            content,
            favorite,
        } => {
            let folder = super::folder_id(folder)?;
            let note = notes.add_note(title, content, &folder, *favorite).await?;
            match format {
                OutputFormat::Json => output::print_item(&note, format),
                OutputFormat::Table => {
                    output::print_success(&format!("Note '{}' created (id: {})", note.title, note.id))
                }
            }
        }
        NoteCommand::Update {
            folder,
            id,
            title,
            content,
            favorite,
            cover,
        } => {
            let folder = super::folder_id(folder)?;
            let mut note = notes.get_note(&folder, &NoteId::parse(id.as_str())?).await?;
            if let Some(title) = title {
                note.title = title.clone();
            }
            if let Some(content) = content {
                note.content = content.clone();
            }
            if let Some(favorite) = favorite {
                note.is_favorite = *favorite;
            }
            if let Some(cover) = cover {
                note.cover_image_url = Some(cover.clone()).filter(|url| !url.is_empty());
            }
            let note = notes.update_note(note).await?;
            output::print_success(&format!("Note {} updated", note.id));
        }
        NoteCommand::Delete { folder, id } => {
            let note_id = NoteId::parse(id.as_str())?;
            notes.delete_note(&super::folder_id(folder)?, &note_id).await?;
            output::print_success(&format!("Deleted note {note_id}"));
        }
        NoteCommand::Search { query, folder } => {
            let source = match folder {
                Some(folder) => notes.list_by_folder(&super::folder_id(folder)?).await?,
                None => notes.list_all().await?,
            };

            let mut adapter = NotesAdapter::new();
            adapter.set_notes(source);
            adapter.filter(query);

            let rows: Vec<CardRow> = (0..adapter.item_count())
                .filter_map(|position| adapter.bind(position))
                .map(|card| CardRow {
                    title: card.title,
                    cover: card.cover_image_url.unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

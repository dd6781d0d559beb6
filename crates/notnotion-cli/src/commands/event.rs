//! Calendar event CLI commands.

use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use notnotion_core::error::AppError;
use notnotion_core::types::NoteId;
use notnotion_entity::event::CalendarEvent;
use notnotion_service::EventDraft;

use crate::output::{self, OutputFormat};
use crate::state::AppState;

/// Arguments for event commands
#[derive(Debug, Args)]
pub struct EventArgs {
    /// Event subcommand
    #[command(subcommand)]
    pub command: EventCommand,
}

/// Event subcommands
#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Create an event at a local date and time
    Create {
        /// Title
        #[arg(short, long)]
        title: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// Linked note ID
        #[arg(long)]
        note: Option<String>,
    },
    /// List events, earliest first
    List {
        /// Only events starting on this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
}

fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

/// Event display row
#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    /// Event ID
    id: String,
    /// Title
    title: String,
    /// Start, local time
    start: String,
    /// Linked note
    note: String,
}

impl From<&CalendarEvent> for EventRow {
    fn from(e: &CalendarEvent) -> Self {
        Self {
            id: e.id.to_string(),
            title: e.title.clone(),
            start: e
                .start_date
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            note: e.note_id.as_ref().map(ToString::to_string).unwrap_or_default(),
        }
    }
}

/// Execute event commands
pub async fn execute(
    args: &EventArgs,
    state: &AppState,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        EventCommand::Create {
            title,
            description,
            date,
            time,
            note,
        } => {
            let note_id = note.as_deref().map(NoteId::parse).transpose()?;
            let event = state
                .events
                .create_event(EventDraft {
                    title: title.clone(),
                    description: description.clone(),
                    date: *date,
                    time: *time,
                    note_id,
                })
                .await?;

            match format {
                OutputFormat::Json => output::print_item(&event, format),
                OutputFormat::Table => output::print_success(&format!(
                    "Event '{}' created (id: {})",
                    event.title, event.id
                )),
            }
        }
        EventCommand::List { on } => {
            let events = match on {
                Some(date) => state.events.list_events_on(*date).await?,
                None => state.events.list_events().await?,
            };
            let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

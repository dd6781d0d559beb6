//! Calendar event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notnotion_core::types::{EventId, NoteId};

/// A calendar event, optionally linked to a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Start instant.
    pub start_date: DateTime<Utc>,
    /// End instant.
    pub end_date: DateTime<Utc>,
    /// Linked note, if any.
    #[serde(default)]
    pub note_id: Option<NoteId>,
    /// Minutes before start to remind; 0 disables the reminder.
    #[serde(default)]
    pub reminder_minutes: i32,
    /// Whether the event repeats.
    #[serde(default)]
    pub is_recurring: bool,
    /// Recurrence rule, when recurring.
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last modified.
    pub updated_at: DateTime<Utc>,
}

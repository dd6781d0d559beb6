//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use notnotion_core::types::{FolderId, NoteId};

/// Name of the favorite flag field.
pub const FAVORITE_FIELD: &str = "isFavorite";

/// A note owned by exactly one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier within the owning folder.
    pub id: NoteId,
    /// Title shown in lists. Missing or `null` titles read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// The owning folder.
    pub folder_id: FolderId,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last modified.
    pub updated_at: DateTime<Utc>,
    /// Whether the note is marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Optional cover image shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

impl Note {
    /// Creates a note with a fresh id and both timestamps set to now.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        folder_id: FolderId,
        is_favorite: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::generate(),
            title: title.into(),
            content: content.into(),
            folder_id,
            created_at: now,
            updated_at: now,
            is_favorite,
            cover_image_url: None,
        }
    }

    /// Marks the note as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

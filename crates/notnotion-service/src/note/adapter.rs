//! Client-side note list with substring filtering.

use serde::Serialize;

use notnotion_entity::note::Note;

/// Returns the notes whose title contains `query`, ignoring case.
///
/// An empty or whitespace-only query returns every note. Order is preserved.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    if query.trim().is_empty() {
        return notes.to_vec();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What one list row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    /// Note title.
    pub title: String,
    /// Cover image, only when the note has a non-empty URL.
    pub cover_image_url: Option<String>,
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            cover_image_url: note
                .cover_image_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Holds the full note list and the currently visible (filtered) part.
#[derive(Debug, Clone, Default)]
pub struct NotesAdapter {
    full: Vec<Note>,
    visible: Vec<Note>,
}

impl NotesAdapter {
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list; every note becomes visible.
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.visible = notes.clone();
        self.full = notes;
    }

    /// Restricts the visible list to notes matching `query`.
    pub fn filter(&mut self, query: &str) {
        self.visible = filter_notes(&self.full, query);
    }

    /// The visible notes.
    pub fn visible(&self) -> &[Note] {
        &self.visible
    }

    /// Number of visible rows.
    pub fn item_count(&self) -> usize {
        self.visible.len()
    }

    /// The row at `position`, if any.
    pub fn bind(&self, position: usize) -> Option<NoteCard> {
        self.visible.get(position).map(NoteCard::from)
    }

    /// The visible note at `position`, as delivered to click handlers.
    pub fn note_at(&self, position: usize) -> Option<&Note> {
        self.visible.get(position)
    }
}

//! Typed document paths.
//!
//! Every record lives under its owner's namespace:
//!
//! - `users/{uid}` (profile document)
//! - `users/{uid}/folders/{folderId}`
//! - `users/{uid}/folders/{folderId}/notes/{noteId}`
//! - `users/{uid}/calendarEvents/{eventId}`
//!
//! Paths are built from validated ids only, so a rendered path always has
//! the expected number of segments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::{EventId, FolderId, NoteId, UserId};

/// A collection of documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionPath {
    /// `users`, one profile document per user.
    Users,
    /// `users/{uid}/folders`
    Folders(UserId),
    /// `users/{uid}/folders/{folderId}/notes`
    Notes(UserId, FolderId),
    /// `users/{uid}/calendarEvents`
    CalendarEvents(UserId),
}

impl CollectionPath {
    /// The owning user, if the collection is user-scoped.
    pub fn owner(&self) -> Option<&UserId> {
        match self {
            Self::Users => None,
            Self::Folders(uid) | Self::Notes(uid, _) | Self::CalendarEvents(uid) => Some(uid),
        }
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Users => write!(f, "users"),
            Self::Folders(uid) => write!(f, "users/{uid}/folders"),
            Self::Notes(uid, folder) => write!(f, "users/{uid}/folders/{folder}/notes"),
            Self::CalendarEvents(uid) => write!(f, "users/{uid}/calendarEvents"),
        }
    }
}

/// A single document: a collection plus a document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentPath {
    collection: CollectionPath,
    id: String,
}

impl DocumentPath {
    /// `users/{uid}`
    pub fn profile(uid: &UserId) -> Self {
        Self {
            collection: CollectionPath::Users,
            id: uid.to_string(),
        }
    }

    /// `users/{uid}/folders/{folderId}`
    pub fn folder(uid: &UserId, folder: &FolderId) -> Self {
        Self {
            collection: CollectionPath::Folders(uid.clone()),
            id: folder.to_string(),
        }
    }

    /// `users/{uid}/folders/{folderId}/notes/{noteId}`
    pub fn note(uid: &UserId, folder: &FolderId, note: &NoteId) -> Self {
        Self {
            collection: CollectionPath::Notes(uid.clone(), folder.clone()),
            id: note.to_string(),
        }
    }

    /// `users/{uid}/calendarEvents/{eventId}`
    pub fn event(uid: &UserId, event: &EventId) -> Self {
        Self {
            collection: CollectionPath::CalendarEvents(uid.clone()),
            id: event.to_string(),
        }
    }

    /// The collection containing this document.
    pub fn collection(&self) -> &CollectionPath {
        &self.collection
    }

    /// The document id within its collection.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid() -> UserId {
        UserId::parse("u1").unwrap()
    }

    #[test]
    fn test_rendered_paths() {
        let folder = FolderId::parse("f1").unwrap();
        let note = NoteId::parse("n1").unwrap();
        let event = EventId::parse("e1").unwrap();

        assert_eq!(DocumentPath::profile(&uid()).to_string(), "users/u1");
        assert_eq!(
            DocumentPath::folder(&uid(), &folder).to_string(),
            "users/u1/folders/f1"
        );
        assert_eq!(
            DocumentPath::note(&uid(), &folder, &note).to_string(),
            "users/u1/folders/f1/notes/n1"
        );
        assert_eq!(
            DocumentPath::event(&uid(), &event).to_string(),
            "users/u1/calendarEvents/e1"
        );
    }

    #[test]
    fn test_collection_owner() {
        let folder = FolderId::parse("f1").unwrap();
        assert_eq!(CollectionPath::Users.owner(), None);
        assert_eq!(
            CollectionPath::Notes(uid(), folder).owner(),
            Some(&uid())
        );
    }
}

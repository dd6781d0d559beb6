//! # notnotion-service
//!
//! Business logic service layer for not&notion. Each service resolves the
//! signed-in user, builds typed document paths under that user's namespace,
//! and talks to the document store.
//!
//! Services follow constructor injection: the store and the auth provider
//! are provided at construction time via `Arc` references.

pub mod context;
pub mod event;
pub mod folder;
pub mod note;
pub mod profile;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use event::{EventDraft, EventService};
pub use folder::{DeleteReport, FolderService, SubtreeDeleter};
pub use note::{NoteCard, NoteService, NotesAdapter, filter_notes};
pub use profile::ProfileService;

//! Note management and the client-side note list.

pub mod adapter;
pub mod service;

pub use adapter::{NoteCard, NotesAdapter, filter_notes};
pub use service::NoteService;

//! Folder management and recursive subtree deletion.

pub mod delete;
pub mod service;

pub use delete::{DeleteReport, SubtreeDeleter};
pub use service::FolderService;

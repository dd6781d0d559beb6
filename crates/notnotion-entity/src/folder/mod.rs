//! Folder domain entities.

pub mod model;
pub mod parent;

pub use model::Folder;
pub use parent::ParentRef;

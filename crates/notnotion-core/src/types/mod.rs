//! Core type definitions used across the not&notion workspace.

pub mod filter;
pub mod id;
pub mod path;

pub use filter::{FieldFilter, FilterValue};
pub use id::*;
pub use path::{CollectionPath, DocumentPath};

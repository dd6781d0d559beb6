//! Core traits defined in `notnotion-core` and implemented by other crates.

pub mod auth;
pub mod store;

pub use auth::{AuthProvider, AuthUser};
pub use store::{Document, DocumentStore};

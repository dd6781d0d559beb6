//! # notnotion-core
//!
//! Core crate for not&notion. Contains the document-store and authentication
//! traits, configuration schemas, typed identifiers and document paths,
//! the equality filter used for store queries, and the unified error system.
//!
//! This crate has **no** internal dependencies on other not&notion crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

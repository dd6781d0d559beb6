//! User profile loading.

pub mod service;

pub use service::ProfileService;

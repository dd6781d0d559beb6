//! Session management.

pub mod manager;

pub use manager::SessionManager;

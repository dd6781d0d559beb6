//! # notnotion-cli
//!
//! Command definitions, dispatch and output formatting for the `notnotion`
//! binary. The binary owns configuration and logging; this crate receives a
//! ready [`AppState`] and runs one command against it.

pub mod commands;
pub mod output;
pub mod state;

pub use commands::{Cli, Commands};
pub use output::OutputFormat;
pub use state::AppState;

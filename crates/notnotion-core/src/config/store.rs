//! Document store configuration.

use serde::{Deserialize, Serialize};

/// In-memory document store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON snapshot loaded at startup and written back after each command.
    /// `None` keeps the store purely in memory.
    #[serde(default)]
    pub snapshot_path: Option<String>,
    /// Artificial delay applied to every store call, in milliseconds.
    /// Used to exercise request overlap the way a remote store would.
    #[serde(default)]
    pub latency_ms: u64,
}

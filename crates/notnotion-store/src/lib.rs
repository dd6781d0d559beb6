//! # notnotion-store
//!
//! Document store implementations for not&notion.
//!
//! - **memory**: in-process store backed by a concurrent map, with an
//!   optional artificial latency so that overlapping requests behave like
//!   they would against a hosted database
//! - **snapshot**: JSON snapshot load/save for the memory store, so the
//!   CLI keeps data between runs

pub mod memory;
pub mod snapshot;

pub use memory::MemoryDocumentStore;

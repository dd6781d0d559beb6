//! Calendar events.

pub mod service;

pub use service::{EventDraft, EventService};

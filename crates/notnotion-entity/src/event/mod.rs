//! Calendar event entities.

pub mod model;

pub use model::CalendarEvent;

//! Note domain entities.

pub mod model;

pub use model::Note;

//! User profile entities.

pub mod model;

pub use model::{Avatar, ProfileDocument, UserProfile};

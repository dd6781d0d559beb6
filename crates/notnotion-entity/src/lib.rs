//! # notnotion-entity
//!
//! Document models for not&notion. Every struct in this crate is a record
//! stored in the document store (folders, notes, calendar events, profile
//! documents) or a value derived from one. Records serialize with camelCase
//! field names, the wire format of the hosted store.

pub mod event;
pub mod folder;
pub mod note;
pub mod profile;

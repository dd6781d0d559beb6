//! Integration tests for not&notion, run against the in-memory store.

mod helpers;

mod delete_test;
mod notes_test;
mod snapshot_test;

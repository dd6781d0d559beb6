//! # notnotion-auth
//!
//! Session handling for not&notion. The [`SessionManager`] holds the
//! signed-in user and implements
//! [`AuthProvider`](notnotion_core::traits::AuthProvider) for the services.

pub mod session;

pub use session::SessionManager;

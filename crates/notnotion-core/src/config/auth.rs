//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// The user signed in at startup.
///
/// With no `user_id` the application runs signed out and every
/// user-scoped operation fails with an authentication error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authenticated user id.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Display name reported by the identity provider.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Photo URL reported by the identity provider.
    #[serde(default)]
    pub photo_url: Option<String>,
}

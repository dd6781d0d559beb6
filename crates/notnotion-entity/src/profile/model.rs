//! Profile document and resolved profile.

use serde::{Deserialize, Serialize};

/// The `users/{uid}` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// User-chosen name.
    #[serde(default)]
    pub username: Option<String>,
    /// Avatar image, base64-encoded.
    #[serde(default)]
    pub photo_base64: Option<String>,
}

/// Avatar to display for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Avatar {
    /// Image bytes decoded from the profile document.
    Embedded(Vec<u8>),
    /// Image URL from the identity provider.
    Remote(String),
    /// The built-in placeholder.
    Default,
}

/// A display name and avatar, after fallbacks were applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Name to show.
    pub display_name: String,
    /// Avatar to show.
    pub avatar: Avatar,
}

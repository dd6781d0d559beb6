//! Resolves a display name and avatar for the signed-in user.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{info, warn};

use notnotion_core::error::{AppError, ErrorKind};
use notnotion_core::traits::auth::{AuthProvider, AuthUser};
use notnotion_core::traits::store::DocumentStore;
use notnotion_core::types::DocumentPath;
use notnotion_entity::profile::{Avatar, ProfileDocument, UserProfile};

use crate::context::RequestContext;

const UNAVAILABLE: &str = "Unavailable";
const UNNAMED: &str = "Unnamed";

/// Loads and saves user profiles.
#[derive(Debug, Clone)]
pub struct ProfileService {
    store: Arc<dyn DocumentStore>,
    auth: Arc<dyn AuthProvider>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: Arc<dyn DocumentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// Loads the profile of the signed-in user.
    ///
    /// Never fails: a missing user yields the "Unavailable" placeholder and
    /// an unreadable profile document falls back to the identity provider.
    pub async fn load_profile(&self) -> UserProfile {
        let Some(user) = self.auth.current_user() else {
            return UserProfile {
                display_name: UNAVAILABLE.to_string(),
                avatar: Avatar::Default,
            };
        };

        let document = match self.read_document(&user).await {
            Ok(document) => document.unwrap_or_default(),
            Err(e) => {
                warn!(user_id = %user.uid, error = %e, "Failed to read profile, using fallbacks");
                ProfileDocument::default()
            }
        };

        resolve(&user, &document)
    }

    /// Writes the profile document of the signed-in user.
    pub async fn save_profile(
        &self,
        username: Option<&str>,
        photo: Option<&[u8]>,
    ) -> Result<ProfileDocument, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        let document = ProfileDocument {
            username: username.map(|name| name.trim().to_string()),
            photo_base64: photo.map(|bytes| STANDARD.encode(bytes)),
        };
        let data = serde_json::to_value(&document)?;
        self.store
            .set(&DocumentPath::profile(uid), data)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to save profile", e))?;

        info!(user_id = %uid, "Profile saved");
        Ok(document)
    }

    async fn read_document(&self, user: &AuthUser) -> Result<Option<ProfileDocument>, AppError> {
        self.store
            .get(&DocumentPath::profile(&user.uid))
            .await?
            .map(|doc| doc.decode())
            .transpose()
    }
}

fn resolve(user: &AuthUser, document: &ProfileDocument) -> UserProfile {
    let display_name = non_blank(document.username.as_deref())
        .or_else(|| non_blank(user.display_name.as_deref()))
        .unwrap_or(UNNAMED)
        .to_string();

    let embedded = document
        .photo_base64
        .as_deref()
        .and_then(|encoded| match STANDARD.decode(encoded) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(user_id = %user.uid, error = %e, "Ignoring undecodable profile photo");
                None
            }
        });

    let avatar = match (embedded, non_blank(user.photo_url.as_deref())) {
        (Some(bytes), _) => Avatar::Embedded(bytes),
        (None, Some(url)) => Avatar::Remote(url.to_string()),
        (None, None) => Avatar::Default,
    };

    UserProfile {
        display_name,
        avatar,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

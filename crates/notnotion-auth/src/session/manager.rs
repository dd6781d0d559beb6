//! Signed-in user state.

use std::sync::{Arc, RwLock};

use tracing::info;

use notnotion_core::config::AuthConfig;
use notnotion_core::error::AppError;
use notnotion_core::traits::auth::{AuthProvider, AuthUser};
use notnotion_core::types::UserId;

/// Holds the current session. Cloning shares the session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    current: Arc<RwLock<Option<AuthUser>>>,
}

impl SessionManager {
    /// Creates a signed-out session manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session manager, signed in when the configuration names a user.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let manager = Self::new();
        if let Some(raw) = &config.user_id {
            manager.sign_in(AuthUser {
                uid: UserId::parse(raw.as_str())?,
                display_name: config.display_name.clone(),
                photo_url: config.photo_url.clone(),
            });
        }
        Ok(manager)
    }

    /// Replaces the current user.
    pub fn sign_in(&self, user: AuthUser) {
        info!(user_id = %user.uid, "Signed in");
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(user);
    }

    /// Clears the current user.
    pub fn sign_out(&self) {
        let previous = self
            .current
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(user) = previous {
            info!(user_id = %user.uid, "Signed out");
        }
    }

    /// Returns whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}

impl AuthProvider for SessionManager {
    fn current_user(&self) -> Option<AuthUser> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

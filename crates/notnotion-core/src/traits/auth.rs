//! Authentication collaborator trait.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// The identity reported by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// The user's id; every record is scoped under it.
    pub uid: UserId,
    /// Display name from the identity provider.
    pub display_name: Option<String>,
    /// Photo URL from the identity provider.
    pub photo_url: Option<String>,
}

/// Source of the currently signed-in user.
pub trait AuthProvider: Send + Sync + std::fmt::Debug + 'static {
    /// The signed-in user, or `None` when signed out.
    fn current_user(&self) -> Option<AuthUser>;

    /// The signed-in user's id.
    fn current_user_id(&self) -> Option<UserId> {
        self.current_user().map(|user| user.uid)
    }
}

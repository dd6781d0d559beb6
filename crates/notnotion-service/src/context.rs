//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use tracing::warn;

use notnotion_core::error::AppError;
use notnotion_core::traits::auth::{AuthProvider, AuthUser};
use notnotion_core::types::UserId;

/// Context for one service call.
///
/// Resolved from the [`AuthProvider`] at the start of every operation, so
/// that every path the operation builds is scoped under the same user.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The signed-in user.
    pub user: AuthUser,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Resolves the signed-in user, failing with an authentication error
    /// when there is none.
    pub fn resolve(auth: &dyn AuthProvider) -> Result<Self, AppError> {
        let user = auth.current_user().ok_or_else(|| {
            warn!("No authenticated user");
            AppError::authentication("No authenticated user")
        })?;

        Ok(Self {
            user,
            request_time: Utc::now(),
        })
    }

    /// The signed-in user's id.
    pub fn user_id(&self) -> &UserId {
        &self.user.uid
    }
}

//! Session-related types.
//!
//! Types stored in the session for authentication state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workboard_core::{Identity, Role, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's ID at the identity service.
    pub id: UserId,
    /// User's role.
    pub role: Role,
    /// User's email address.
    pub email: String,
    /// When this session was authenticated.
    pub authenticated_at: DateTime<Utc>,
}

impl CurrentUser {
    /// The gate-evaluator identity for this session user.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        Identity::new(self.id, self.role)
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

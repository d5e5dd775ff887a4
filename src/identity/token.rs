//! Authentication token records.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Stored authentication token. Only the hash of the secret is kept.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Unique token identifier.
    pub token_id: String,

    /// Owning user.
    pub user_id: String,

    /// Verifier for the token secret.
    pub token_hash: String,

    /// Human label, e.g. the client that requested it.
    pub name: String,

    /// Issue time.
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,

    /// Expiry time, `None` for tokens that never expire.
    #[serde(default)]
    pub expires_at: Option<Timestamp>,

    /// Last time the token was presented.
    #[serde(default)]
    pub last_used_at: Option<Timestamp>,

    /// Long-lived tokens get a different default expiry policy.
    #[serde(default)]
    pub is_long_lived: bool,
}

impl AuthToken {
    /// Create a short-lived, never-used token record with no expiry.
    pub fn new(
        token_id: impl Into<String>,
        user_id: impl Into<String>,
        token_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            token_id: token_id.into(),
            user_id: user_id.into(),
            token_hash: token_hash.into(),
            name: name.into(),
            created_at: Timestamp::now(),
            expires_at: None,
            last_used_at: None,
            is_long_lived: false,
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token_id", &self.token_id)
            .field("user_id", &self.user_id)
            .field("token_hash", &"**redacted**")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .field("last_used_at", &self.last_used_at)
            .field("is_long_lived", &self.is_long_lived)
            .finish()
    }
}

//! Identity provider links.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Where an identity was authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderType {
    /// Local username/password accounts.
    Builtin,

    /// Home Assistant accounts.
    HomeAssistant,
}

impl AuthProviderType {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::HomeAssistant => "homeassistant",
        }
    }
}

impl fmt::Display for AuthProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link between a [`User`](crate::identity::User) and an external identity.
///
/// At most one link per `(user_id, provider_type)` is meaningful; the owning
/// store enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAuthProvider {
    /// Unique link identifier.
    pub link_id: String,

    /// Linked user.
    pub user_id: String,

    /// Provider that authenticated the identity.
    pub provider_type: AuthProviderType,

    /// User id as known by the provider.
    pub provider_user_id: String,

    /// Link creation time.
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,
}

impl UserAuthProvider {
    /// Create a link stamped with the current time.
    pub fn new(
        link_id: impl Into<String>,
        user_id: impl Into<String>,
        provider_type: AuthProviderType,
        provider_user_id: impl Into<String>,
    ) -> Self {
        Self {
            link_id: link_id.into(),
            user_id: user_id.into(),
            provider_type,
            provider_user_id: provider_user_id.into(),
            created_at: Timestamp::now(),
        }
    }
}

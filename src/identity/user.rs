//! User records.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::roles::{ADMIN_ROLE_ID, GUEST_ROLE_ID, USER_ROLE_ID};

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub user_id: String,

    /// Login name.
    pub username: String,

    /// Role id, resolved against a role store at check time.
    pub role: String,

    /// Disabled accounts are denied every permission.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Account creation time.
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,

    /// Optional display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Optional avatar location.
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Opaque per-user preferences.
    #[serde(default)]
    pub preferences: Map<String, Value>,

    /// Providers this user may see. Empty means no restriction.
    #[serde(default)]
    pub provider_filter: Vec<String>,

    /// Players this user may see or control. Empty means no restriction.
    #[serde(default)]
    pub player_filter: Vec<String>,
}

const fn enabled_by_default() -> bool {
    true
}

impl User {
    /// Create an enabled user with no preferences or filters.
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            role: role.into(),
            enabled: true,
            created_at: Timestamp::now(),
            display_name: None,
            avatar_url: None,
            preferences: Map::new(),
            provider_filter: Vec::new(),
            player_filter: Vec::new(),
        }
    }

    /// Display name, falling back to the username.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Closed role set used by older records.
///
/// Only kept for migrating those records; convert with [`UserRole::role_id`]
/// and store the resulting id in [`User::role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator.
    Admin,

    /// Standard user.
    User,

    /// Read-only guest.
    Guest,
}

impl UserRole {
    /// Role id of the matching built-in role.
    #[must_use]
    pub const fn role_id(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_ROLE_ID,
            Self::User => USER_ROLE_ID,
            Self::Guest => GUEST_ROLE_ID,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role_id())
    }
}

impl From<UserRole> for String {
    fn from(value: UserRole) -> Self {
        value.role_id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() -> TestResult {
        let user: User = serde_json::from_str(
            r#"{"user_id": "u1", "username": "alice", "role": "dj"}"#,
        )?;

        assert!(user.enabled);
        assert!(user.preferences.is_empty());
        assert!(user.player_filter.is_empty());
        assert_eq!(user.display_name, None);

        Ok(())
    }

    #[test]
    fn missing_role_is_a_deserialization_error() {
        let result = serde_json::from_str::<User>(r#"{"user_id": "u1", "username": "alice"}"#);

        assert!(result.is_err(), "role is required");
    }

    #[test]
    fn name_prefers_display_name() {
        let mut user = User::new("u1", "alice", "user");

        assert_eq!(user.name(), "alice");

        user.display_name = Some("Alice".to_string());

        assert_eq!(user.name(), "Alice");
    }

    #[test]
    fn legacy_roles_map_to_built_in_ids() -> TestResult {
        let role: UserRole = serde_json::from_str(r#""guest""#)?;
        let user = User::new("u1", "bob", role);

        assert_eq!(user.role, GUEST_ROLE_ID);
        assert_eq!(UserRole::Admin.to_string(), ADMIN_ROLE_ID);

        Ok(())
    }
}

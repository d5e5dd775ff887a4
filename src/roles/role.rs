//! Role

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::permissions::{PermissionScope, ScopeQuery};

/// Ordered permission list carried by a role.
///
/// Order is kept for display and round-trips only; evaluation treats it as a set.
pub type PermissionList = SmallVec<[PermissionScope; 8]>;

/// A named bundle of permission scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable role identifier, referenced by [`User::role`](crate::identity::User::role).
    pub role_id: String,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Built-in role that must not be edited or deleted.
    pub is_system: bool,

    /// Granted scopes.
    #[serde(default)]
    pub permissions: PermissionList,

    /// Creation time, absent for built-in roles.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Role {
    /// Create a custom role with no permissions.
    pub fn new(
        role_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            name: name.into(),
            description: description.into(),
            is_system: false,
            permissions: SmallVec::new(),
            created_at: Some(Timestamp::now()),
        }
    }

    /// Replace the permission list, dropping repeated scopes.
    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = PermissionScope>) -> Self {
        self.permissions.clear();

        for scope in permissions {
            self.grant(scope);
        }

        self
    }

    /// Add `scope` to the list. Returns `false` if it was already present.
    pub fn grant(&mut self, scope: PermissionScope) -> bool {
        if self.permissions.contains(&scope) {
            return false;
        }

        self.permissions.push(scope);

        true
    }

    /// Remove `scope` from the list. Returns `false` if it was not present.
    pub fn revoke(&mut self, scope: PermissionScope) -> bool {
        let before = self.permissions.len();

        self.permissions.retain(|granted| *granted != scope);

        self.permissions.len() != before
    }

    /// Whether this role holds the system administration wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.permissions.contains(&PermissionScope::SystemAdmin)
    }

    /// Check whether this role grants `requested`.
    ///
    /// Strings that do not name a registered scope are never granted, not even
    /// to a wildcard role. The wildcard grants every registered scope; any other
    /// role needs the exact scope in its list.
    pub fn has_permission(&self, requested: impl ScopeQuery) -> bool {
        let Some(scope) = requested.resolve_scope() else {
            return false;
        };

        if self.is_wildcard() {
            return true;
        }

        self.permissions.contains(&scope)
    }

    /// Every scope this role effectively grants, with the wildcard expanded.
    #[must_use]
    pub fn effective_permissions(&self) -> PermissionList {
        if self.is_wildcard() {
            return PermissionScope::ALL.into_iter().collect();
        }

        self.permissions.clone()
    }
}

/// Check `requested` against an optional role; a missing role grants nothing.
pub fn has_permission(role: Option<&Role>, requested: impl ScopeQuery) -> bool {
    role.is_some_and(|role| role.has_permission(requested))
}

//! Role Registry
//!
//! Custom roles layered over the built-in table. Lookups try the custom store
//! first and fall back to the built-in roles; built-in ids can never be
//! shadowed, replaced or removed.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    identity::User,
    permissions::ScopeQuery,
    roles::{
        Role, RoleError,
        defaults::{default_role, default_roles, is_default_role_id},
    },
};

/// In-memory role lookup table.
///
/// Performs no locking of its own; wrap it when shared between tasks.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    custom: FxHashMap<String, Role>,
}

impl RoleRegistry {
    /// Registry containing only the built-in roles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with `roles` on top of the built-in ones.
    ///
    /// # Errors
    ///
    /// Returns the first error [`RoleRegistry::insert`] would return.
    pub fn with_custom_roles(roles: impl IntoIterator<Item = Role>) -> Result<Self, RoleError> {
        let mut registry = Self::new();

        for role in roles {
            registry.insert(role)?;
        }

        Ok(registry)
    }

    /// Resolve a role id, custom store first.
    pub fn resolve(&self, role_id: &str) -> Option<&Role> {
        self.custom.get(role_id).or_else(|| default_role(role_id))
    }

    /// Add or replace a custom role, returning the one it replaced.
    ///
    /// # Errors
    ///
    /// Rejects empty ids, built-in ids and roles flagged `is_system`.
    pub fn insert(&mut self, role: Role) -> Result<Option<Role>, RoleError> {
        if role.role_id.trim().is_empty() {
            return Err(RoleError::EmptyRoleId);
        }

        if is_default_role_id(&role.role_id) {
            return Err(RoleError::SystemRoleImmutable(role.role_id));
        }

        if role.is_system {
            return Err(RoleError::CustomSystemRole(role.role_id));
        }

        debug!(
            role_id = %role.role_id,
            permission_count = role.permissions.len(),
            "stored custom role"
        );

        Ok(self.custom.insert(role.role_id.clone(), role))
    }

    /// Remove a custom role.
    ///
    /// # Errors
    ///
    /// Built-in roles cannot be removed; unknown ids are reported as not found.
    pub fn remove(&mut self, role_id: &str) -> Result<Role, RoleError> {
        if is_default_role_id(role_id) {
            return Err(RoleError::SystemRoleImmutable(role_id.to_string()));
        }

        let role = self
            .custom
            .remove(role_id)
            .ok_or_else(|| RoleError::NotFound(role_id.to_string()))?;

        debug!(role_id, "removed custom role");

        Ok(role)
    }

    /// All roles: built-in ones first in fixed order, then custom roles by id.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        let mut custom: Vec<&Role> = self.custom.values().collect();

        custom.sort_unstable_by(|left, right| left.role_id.cmp(&right.role_id));

        default_roles().iter().chain(custom)
    }

    /// Number of custom roles stored.
    #[must_use]
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// Check `requested` for a user by resolving the user's role id.
    ///
    /// Disabled users and users whose role does not resolve are denied.
    pub fn user_has_permission(&self, user: &User, requested: impl ScopeQuery) -> bool {
        if !user.enabled {
            debug!(user_id = %user.user_id, "permission denied for disabled user");

            return false;
        }

        let Some(role) = self.resolve(&user.role) else {
            warn!(
                user_id = %user.user_id,
                role_id = %user.role,
                "permission denied, user references an unknown role"
            );

            return false;
        };

        role.has_permission(requested)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        permissions::PermissionScope,
        roles::defaults::{ADMIN_ROLE_ID, DJ_ROLE_ID},
    };

    fn listener() -> Role {
        Role::new("listener", "Listener", "Can only listen")
            .with_permissions([PermissionScope::PlayerView, PermissionScope::LibraryRead])
    }

    #[test]
    fn resolves_built_in_roles_without_custom_store() {
        let registry = RoleRegistry::new();

        assert!(registry.resolve(ADMIN_ROLE_ID).is_some());
        assert!(registry.resolve("listener").is_none());
        assert_eq!(registry.roles().count(), 4);
    }

    #[test]
    fn custom_roles_resolve_after_insert() -> TestResult {
        let mut registry = RoleRegistry::new();

        assert!(registry.insert(listener())?.is_none());

        let role = registry.resolve("listener");

        assert!(role.is_some_and(|role| role.has_permission(PermissionScope::LibraryRead)));
        assert_eq!(registry.custom_len(), 1);

        Ok(())
    }

    #[test]
    fn insert_replaces_existing_custom_role() -> TestResult {
        let mut registry = RoleRegistry::with_custom_roles([listener()])?;

        let replaced = registry.insert(listener().with_permissions([PermissionScope::PlayerView]))?;

        assert!(replaced.is_some());
        assert!(
            !registry
                .resolve("listener")
                .is_some_and(|role| role.has_permission(PermissionScope::LibraryRead)),
            "replacement should win"
        );

        Ok(())
    }

    #[test]
    fn built_in_ids_cannot_be_shadowed() {
        let mut registry = RoleRegistry::new();
        let mut fake_dj = listener();

        fake_dj.role_id = DJ_ROLE_ID.to_string();

        assert_eq!(
            registry.insert(fake_dj),
            Err(RoleError::SystemRoleImmutable(DJ_ROLE_ID.to_string()))
        );
        assert!(
            registry
                .resolve(DJ_ROLE_ID)
                .is_some_and(|role| role.is_system),
            "built-in dj role must survive"
        );
    }

    #[test]
    fn built_in_roles_cannot_be_removed() {
        let mut registry = RoleRegistry::new();

        assert_eq!(
            registry.remove(ADMIN_ROLE_ID),
            Err(RoleError::SystemRoleImmutable(ADMIN_ROLE_ID.to_string()))
        );
        assert_eq!(
            registry.remove("listener"),
            Err(RoleError::NotFound("listener".to_string()))
        );
    }

    #[test]
    fn custom_roles_cannot_claim_system_flag() {
        let mut registry = RoleRegistry::new();
        let mut role = listener();

        role.is_system = true;

        assert_eq!(
            registry.insert(role),
            Err(RoleError::CustomSystemRole("listener".to_string()))
        );
    }

    #[test]
    fn empty_ids_are_rejected() {
        let mut registry = RoleRegistry::new();

        assert_eq!(
            registry.insert(Role::new("  ", "Blank", "")),
            Err(RoleError::EmptyRoleId)
        );
    }

    #[test]
    fn roles_lists_built_ins_then_custom_sorted() -> TestResult {
        let registry = RoleRegistry::with_custom_roles([
            Role::new("zeta", "Zeta", ""),
            Role::new("alpha", "Alpha", ""),
        ])?;

        let ids: Vec<&str> = registry.roles().map(|role| role.role_id.as_str()).collect();

        assert_eq!(ids, ["admin", "user", "guest", "dj", "alpha", "zeta"]);

        Ok(())
    }

    #[test]
    fn user_checks_follow_role_edits() -> TestResult {
        let mut registry = RoleRegistry::with_custom_roles([listener()])?;
        let user = User::new("u1", "alice", "listener");

        assert!(!registry.user_has_permission(&user, "player.queue"));

        registry.insert(listener().with_permissions([PermissionScope::PlayerQueue]))?;

        assert!(registry.user_has_permission(&user, "player.queue"));

        Ok(())
    }

    #[test]
    fn disabled_and_dangling_users_are_denied() {
        let registry = RoleRegistry::new();
        let mut admin = User::new("u1", "root", ADMIN_ROLE_ID);

        assert!(registry.user_has_permission(&admin, PermissionScope::UserDelete));

        admin.enabled = false;

        assert!(!registry.user_has_permission(&admin, PermissionScope::UserDelete));

        let orphan = User::new("u2", "ghost", "deleted-role");

        assert!(!registry.user_has_permission(&orphan, PermissionScope::PlayerView));
    }
}

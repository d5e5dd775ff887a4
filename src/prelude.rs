//! Convenience exports for common library consumers.

pub use crate::{
    config::{AuthConfig, ConfigError},
    guest::{GuestAccessConfig, GuestAccessInfo, GuestCapabilities},
    identity::{AuthProviderType, AuthToken, User, UserAuthProvider, UserRole},
    permissions::{Permission, PermissionDomain, PermissionScope, ScopeQuery, UnknownScopeError},
    roles::{
        ADMIN_ROLE_ID, DJ_ROLE_ID, GUEST_ROLE_ID, PermissionList, Role, RoleError, RoleRegistry,
        USER_ROLE_ID, default_role, default_roles, has_permission,
    },
};

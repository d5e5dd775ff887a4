//! Built-in system roles.

use once_cell::sync::Lazy;
use smallvec::smallvec;

use crate::{permissions::PermissionScope, roles::Role};

/// Role id of the built-in administrator role.
pub const ADMIN_ROLE_ID: &str = "admin";

/// Role id of the built-in standard user role.
pub const USER_ROLE_ID: &str = "user";

/// Role id of the built-in read-only guest role.
pub const GUEST_ROLE_ID: &str = "guest";

/// Role id of the built-in DJ role.
pub const DJ_ROLE_ID: &str = "dj";

static DEFAULT_ROLES: Lazy<[Role; 4]> = Lazy::new(|| {
    [
        Role {
            role_id: ADMIN_ROLE_ID.to_string(),
            name: "Administrator".to_string(),
            description: "Full system access with all permissions".to_string(),
            is_system: true,
            permissions: smallvec![PermissionScope::SystemAdmin],
            created_at: None,
        },
        Role {
            role_id: USER_ROLE_ID.to_string(),
            name: "Standard User".to_string(),
            description: "Standard user with basic playback and library access".to_string(),
            is_system: true,
            permissions: smallvec![
                PermissionScope::PlayerControl,
                PermissionScope::PlayerVolume,
                PermissionScope::PlayerQueue,
                PermissionScope::PlayerView,
                PermissionScope::LibraryRead,
                PermissionScope::PlaylistRead,
                PermissionScope::PlaylistWrite,
                PermissionScope::ProviderView,
            ],
            created_at: None,
        },
        Role {
            role_id: GUEST_ROLE_ID.to_string(),
            name: "Guest".to_string(),
            description: "Limited read-only access".to_string(),
            is_system: true,
            permissions: smallvec![
                PermissionScope::PlayerView,
                PermissionScope::LibraryRead,
                PermissionScope::PlaylistRead,
            ],
            created_at: None,
        },
        Role {
            role_id: DJ_ROLE_ID.to_string(),
            name: "DJ".to_string(),
            description: "Playback control and queue management without library modifications"
                .to_string(),
            is_system: true,
            permissions: smallvec![
                PermissionScope::PlayerControl,
                PermissionScope::PlayerVolume,
                PermissionScope::PlayerQueue,
                PermissionScope::PlayerView,
                PermissionScope::LibraryRead,
                PermissionScope::PlaylistRead,
            ],
            created_at: None,
        },
    ]
});

/// The built-in roles in fixed order: admin, user, guest, dj.
pub fn default_roles() -> &'static [Role] {
    DEFAULT_ROLES.as_slice()
}

/// Look up a built-in role by id.
pub fn default_role(role_id: &str) -> Option<&'static Role> {
    default_roles().iter().find(|role| role.role_id == role_id)
}

/// Whether `role_id` names a built-in role.
pub fn is_default_role_id(role_id: &str) -> bool {
    default_role(role_id).is_some()
}

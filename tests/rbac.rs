//! Permission evaluation properties

use ma_auth::prelude::*;
use testresult::TestResult;

fn custom(permissions: &[PermissionScope]) -> Role {
    Role::new("custom", "Custom", "").with_permissions(permissions.iter().copied())
}

fn built_in(role_id: &str) -> Result<&'static Role, String> {
    default_role(role_id).ok_or_else(|| format!("missing built-in role {role_id}"))
}

#[test]
fn wildcard_roles_are_granted_every_registered_scope() {
    let roles = [
        custom(&[PermissionScope::SystemAdmin]),
        custom(&[PermissionScope::PlayerView, PermissionScope::SystemAdmin]),
    ];

    for role in &roles {
        for scope in PermissionScope::ALL {
            assert!(role.has_permission(scope), "{scope} denied to wildcard role");
            assert!(role.has_permission(scope.as_str()), "{scope} denied by string");
        }
    }
}

#[test]
fn non_wildcard_roles_need_literal_membership() {
    let granted = [
        PermissionScope::PlayerControl,
        PermissionScope::LibraryRead,
        PermissionScope::UserWrite,
    ];
    let role = custom(&granted);

    for scope in PermissionScope::ALL {
        assert_eq!(
            role.has_permission(scope),
            granted.contains(&scope),
            "unexpected result for {scope}"
        );
    }
}

#[test]
fn no_domain_inference() {
    let role = custom(&[PermissionScope::PlayerControl]);

    assert!(!role.has_permission(PermissionScope::PlayerVolume));
    assert!(!role.has_permission("player"));
    assert!(!role.has_permission("player.*"));
}

#[test]
fn unresolvable_strings_are_denied_for_every_role() {
    let roles = default_roles()
        .iter()
        .cloned()
        .chain([custom(&[]), custom(&[PermissionScope::SystemAdmin])]);

    for role in roles {
        assert!(
            !role.has_permission("not.a.real.scope"),
            "{} accepted an unknown scope",
            role.role_id
        );
    }
}

#[test]
fn missing_role_fails_closed() {
    assert!(!has_permission(None, "system.admin"));
    assert!(!has_permission(None, PermissionScope::PlayerView));
}

#[test]
fn empty_custom_role_denies_everything() {
    let role = custom(&[]);

    assert!(!role.is_system);

    for scope in PermissionScope::ALL {
        assert!(!role.has_permission(scope), "{scope} granted to empty role");
    }
}

#[test]
fn admin_is_system_and_holds_only_the_wildcard() -> TestResult {
    let admin = built_in(ADMIN_ROLE_ID)?;

    assert!(admin.is_system);
    assert_eq!(admin.permissions.as_slice(), [PermissionScope::SystemAdmin]);

    Ok(())
}

#[test]
fn every_default_role_is_a_system_role() {
    assert_eq!(default_roles().len(), 4);
    assert!(default_roles().iter().all(|role| role.is_system));
}

#[test]
fn guest_is_read_only_subset_of_user() -> TestResult {
    let guest = built_in(GUEST_ROLE_ID)?;
    let user = built_in(USER_ROLE_ID)?;

    for scope in &guest.permissions {
        assert!(user.permissions.contains(scope), "{scope} missing from user");
        assert!(
            scope.as_str().ends_with(".view") || scope.as_str().ends_with(".read"),
            "{scope} is not read-only"
        );
    }

    assert!(
        guest.permissions.len() < user.permissions.len(),
        "guest must be a strict subset"
    );

    Ok(())
}

#[test]
fn dj_scenarios() -> TestResult {
    let dj = built_in(DJ_ROLE_ID)?;

    assert!(!dj.has_permission("playlist.write"));
    assert!(dj.has_permission("player.queue"));
    assert!(dj.has_permission(PermissionScope::PlayerVolume));
    assert!(!dj.has_permission(PermissionScope::LibraryWrite));

    Ok(())
}

#[test]
fn user_flow_resolves_role_at_check_time() -> TestResult {
    let mut registry = RoleRegistry::new();
    let alice = User::new("u-alice", "alice", "night-shift");

    assert!(!registry.user_has_permission(&alice, "player.control"));

    registry.insert(
        Role::new("night-shift", "Night Shift", "Late playback control")
            .with_permissions([PermissionScope::PlayerControl]),
    )?;

    assert!(registry.user_has_permission(&alice, "player.control"));
    assert!(!registry.user_has_permission(&alice, "player.volume"));

    registry.remove("night-shift")?;

    assert!(!registry.user_has_permission(&alice, "player.control"));

    Ok(())
}

#[test]
fn legacy_role_values_resolve_to_built_in_roles() {
    let registry = RoleRegistry::new();

    for legacy in [UserRole::Admin, UserRole::User, UserRole::Guest] {
        let user = User::new("u", "legacy", legacy);

        assert!(
            registry.user_has_permission(&user, PermissionScope::PlayerView),
            "{legacy} should view players"
        );
    }
}

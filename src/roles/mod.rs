//! Roles
//!
//! A role is a named set of permission scopes. Permission checks are pure set
//! membership with a single exception: a role holding
//! [`PermissionScope::SystemAdmin`](crate::permissions::PermissionScope::SystemAdmin)
//! is granted every registered scope.

pub mod defaults;
mod errors;
mod registry;
mod role;

pub use defaults::{
    ADMIN_ROLE_ID, DJ_ROLE_ID, GUEST_ROLE_ID, USER_ROLE_ID, default_role, default_roles,
    is_default_role_id,
};
pub use errors::*;
pub use registry::*;
pub use role::*;

//! Media platform authorization model
//!
//! Users, authentication tokens, identity provider links, roles, permission
//! scopes and guest access grants, with the role-based permission check that
//! every other component uses to decide who can do what.

pub mod config;
pub mod guest;
pub mod identity;
pub mod permissions;
pub mod prelude;
pub mod roles;

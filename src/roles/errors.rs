//! Role registry errors.

use thiserror::Error;

/// Errors raised when editing the custom role store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// Role id was empty or whitespace.
    #[error("role id must not be empty")]
    EmptyRoleId,

    /// No custom role with this id exists.
    #[error("role not found: {0}")]
    NotFound(String),

    /// The id belongs to a built-in role.
    #[error("built-in role cannot be modified or deleted: {0}")]
    SystemRoleImmutable(String),

    /// A custom role claimed `is_system`.
    #[error("custom role cannot be flagged as a system role: {0}")]
    CustomSystemRole(String),
}

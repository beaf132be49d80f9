//! Permission subsystem errors.

use thiserror::Error;

use super::roles::Role;

/// Permission check and parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// User lacks required permission.
    #[error("missing permission: {0}")]
    MissingPermission(Role),

    /// A role token did not name a known role.
    #[error("unknown role token: {0}")]
    UnknownRole(String),

    /// A role string had too few hyphen-delimited segments to carry a
    /// scope and a permission.
    #[error("malformed role string: {0}")]
    MalformedRoleString(String),

    /// A crowd group string was empty or blank.
    #[error("crowd group string must not be blank")]
    EmptyGroupString,

    /// A crowd group string had fewer than two hyphen-delimited segments.
    #[error("crowd group string `{input}` has too few segments ({found})")]
    TooFewSegments { input: String, found: usize },
}

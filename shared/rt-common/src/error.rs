//! Common error types for the shared crate.

use thiserror::Error;

/// Errors surfaced by the shared domain types.
#[derive(Debug, Error)]
pub enum Error {
    /// Entity-level validation failed (empty name, bad email, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value could not be parsed into a domain type.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience result alias for the shared crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

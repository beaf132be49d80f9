//! Role catalogue for the terminology platform.
//!
//! A closed enumeration rather than string constants, so the resolver's gate
//! comparisons are exhaustive at compile time.

use std::fmt;
use std::str::FromStr;

use super::error::PermissionError;

/// A named permission a user can hold at some scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administer organizations, editions, and projects
    Admin,
    /// Author refset content within a project
    Author,
    /// Review authored content within a project
    Reviewer,
    /// Read-only access; implied by any other grant at the same scope
    Viewer,
}

impl Role {
    /// Returns the lowercase wire token as it appears in role strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rt_server::permissions::Role;
    ///
    /// assert_eq!(Role::Admin.token(), "admin");
    /// ```
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Author => "author",
            Self::Reviewer => "reviewer",
            Self::Viewer => "viewer",
        }
    }

    /// Returns all roles as a slice.
    ///
    /// Useful for iteration and validation.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Admin, Self::Author, Self::Reviewer, Self::Viewer]
    }

    /// Returns a human-readable description of the role.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Admin => "Administer organizations, editions, and projects",
            Self::Author => "Author refset content",
            Self::Reviewer => "Review authored refset content",
            Self::Viewer => "Read-only access",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Role {
    type Err = PermissionError;

    /// Case-insensitive parse of a role token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "author" => Ok(Self::Author),
            "reviewer" => Ok(Self::Reviewer),
            "viewer" => Ok(Self::Viewer),
            other => Err(PermissionError::UnknownRole(other.to_string())),
        }
    }
}

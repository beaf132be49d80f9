//! Role string parsing.
//!
//! A role string encodes one grant as
//! `<organization>-<edition>-<project>-<permission>`. Each scope segment may
//! be the wildcard `all`. Strings are parsed once into a [`RoleGrant`] and
//! compared field-by-field; there is no index arithmetic at check time.

use serde::{Deserialize, Serialize};

use super::error::PermissionError;
use super::roles::Role;

/// Scope-segment value matching any concrete token at that level.
pub const WILDCARD: &str = "all";

/// Minimum number of hyphen-delimited segments in a role string.
const MIN_SEGMENTS: usize = 4;

/// One scope segment of a role string: a wildcard or an exact token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeSegment {
    /// The `all` wildcard; matches any token.
    Any,
    /// An exact lowercase token.
    Exact(String),
}

impl ScopeSegment {
    fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            Self::Any
        } else {
            Self::Exact(raw.to_string())
        }
    }

    /// Whether this segment matches the given canonical token.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(exact) => exact == token,
        }
    }

    /// Whether this segment is the `all` wildcard.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// A role string parsed into its scope and permission parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    /// Organization scope (segment 0).
    pub organization: ScopeSegment,
    /// Edition scope (segment 1).
    pub edition: ScopeSegment,
    /// Project scope (segment 2).
    pub project: ScopeSegment,
    /// Granted permission token (final segment).
    pub permission: String,
}

impl RoleGrant {
    /// Parse a role string, lowercasing it first.
    ///
    /// Fewer than four hyphen-delimited segments is malformed. With more than
    /// four, the final segment carries the permission; interior extras stay
    /// with the scope comparison and simply never match.
    pub fn parse(raw: &str) -> Result<Self, PermissionError> {
        let lowered = raw.trim().to_lowercase();
        let segments: Vec<&str> = lowered.split('-').collect();
        if lowered.is_empty() || segments.len() < MIN_SEGMENTS {
            return Err(PermissionError::MalformedRoleString(raw.to_string()));
        }
        Ok(Self {
            organization: ScopeSegment::parse(segments[0]),
            edition: ScopeSegment::parse(segments[1]),
            project: ScopeSegment::parse(segments[2]),
            permission: segments[segments.len() - 1].to_string(),
        })
    }

    /// Whether this grant carries the requested permission, assuming its
    /// scope gates already passed.
    ///
    /// A trailing `all` grants every permission, and VIEWER is implied by any
    /// grant whose scope matches.
    #[must_use]
    pub fn grants_permission(&self, requested: Role) -> bool {
        self.permission == WILDCARD
            || self.permission == requested.token()
            || requested == Role::Viewer
    }
}

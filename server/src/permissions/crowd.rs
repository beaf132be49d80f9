//! Crowd group string parsing.
//!
//! Group memberships arrive from the directory as hyphen-delimited strings,
//! optionally prefixed with an application token
//! (`rt2-<organization>-<project>-<role>`). Unlike role-string resolution,
//! parse failures here are reported to the caller so format errors can be
//! distinguished from access decisions.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_APPLICATION_TOKEN;

use super::error::PermissionError;

/// A crowd group string parsed into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowdGroup {
    /// Leading application token, if present.
    pub application: Option<String>,
    /// Organization token.
    pub organization: String,
    /// Project token.
    pub project: String,
    /// Role token (final segment; falls back to the project token for
    /// two-segment groups).
    pub role: String,
}

impl CrowdGroup {
    /// Parse a crowd group string using the default application token.
    pub fn parse(raw: &str) -> Result<Self, PermissionError> {
        Self::parse_with_application(raw, DEFAULT_APPLICATION_TOKEN)
    }

    /// Parse a crowd group string.
    ///
    /// A leading segment equal to `application_token` shifts all subsequent
    /// segment positions by one. Empty/blank input and fewer than two
    /// remaining segments are errors.
    pub fn parse_with_application(
        raw: &str,
        application_token: &str,
    ) -> Result<Self, PermissionError> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(PermissionError::EmptyGroupString);
        }

        let mut segments: Vec<&str> = lowered.split('-').collect();
        let application = if segments[0] == application_token {
            Some(segments.remove(0).to_string())
        } else {
            None
        };

        if segments.len() < 2 {
            return Err(PermissionError::TooFewSegments {
                input: raw.to_string(),
                found: segments.len(),
            });
        }

        Ok(Self {
            application,
            organization: segments[0].to_string(),
            project: segments[1].to_string(),
            role: segments[segments.len() - 1].to_string(),
        })
    }
}

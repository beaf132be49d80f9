//! User Types

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A platform user.
///
/// `roles` holds the flat set of encoded role strings assigned at
/// authentication time. The permission layer reads it; nothing here
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Username (unique).
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    /// Full display name.
    pub name: String,
    /// Email address.
    #[validate(email)]
    pub email: Option<String>,
    /// Whether the account is active.
    pub active: bool,
    /// Encoded role strings, e.g. `snomed-int-dentistry-author`.
    pub roles: BTreeSet<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user with the given role strings. Test and fixture helper.
    #[must_use]
    pub fn with_roles<I, S>(username: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            name: username.to_string(),
            email: None,
            active: true,
            roles: roles.into_iter().map(Into::into).collect(),
            created_at: Utc::now(),
        }
    }
}

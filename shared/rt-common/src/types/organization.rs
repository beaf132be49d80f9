//! Organization and Edition Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An organization maintaining one or more terminology editions.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Organization {
    /// Organization ID.
    pub id: Uuid,
    /// Display name (unique). Canonicalized to a crowd token for
    /// permission checks.
    #[validate(length(min = 1, message = "organization name must not be empty"))]
    pub name: String,
    /// Contact address for membership requests.
    #[validate(email)]
    pub primary_contact_email: Option<String>,
    /// Whether the organization is active.
    pub active: bool,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
}

/// A terminology edition published under an organization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Edition {
    /// Edition ID.
    pub id: Uuid,
    /// Name of the owning organization.
    #[validate(length(min = 1, message = "organization name must not be empty"))]
    pub organization_name: String,
    /// Full edition name, e.g. "International Edition".
    #[validate(length(min = 1, message = "edition name must not be empty"))]
    pub name: String,
    /// Short name used as the edition scope token, e.g. "int".
    #[validate(length(min = 1, message = "edition short name must not be empty"))]
    pub short_name: String,
    /// Whether the edition is active.
    pub active: bool,
    /// When the edition was created.
    pub created_at: DateTime<Utc>,
}

//! Project Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::organization::Edition;

/// A refset authoring project within an edition.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Project {
    /// Project ID.
    pub id: Uuid,
    /// The edition this project belongs to.
    #[validate(nested)]
    pub edition: Edition,
    /// Project title.
    #[validate(length(min = 1, message = "project title must not be empty"))]
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Project-level scope token compared against the project segment of a
    /// role string.
    #[validate(length(min = 1, message = "project scope id must not be empty"))]
    pub crowd_scope_id: String,
    /// Whether the project is visible to members only.
    pub private_project: bool,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Name of the organization this project ultimately belongs to.
    #[must_use]
    pub fn organization_name(&self) -> &str {
        &self.edition.organization_name
    }

    /// Short name of the owning edition, used as the edition scope token.
    #[must_use]
    pub fn edition_short_name(&self) -> &str {
        &self.edition.short_name
    }
}

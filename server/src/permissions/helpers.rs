//! Permission helpers for call sites holding domain entities.
//!
//! Walks the entity accessors (Project → Edition → organization name /
//! edition short name) so handlers check permissions without assembling a
//! [`ScopeQuery`] by hand.

use std::collections::BTreeSet;

use rt_common::{Organization, Project, User};

use super::canonical::ScopeCanonicalizer;
use super::error::PermissionError;
use super::resolver::{resolve_permission, Decision, ScopeQuery};
use super::roles::Role;

/// Pre-resolved permission context for a user against a scope.
///
/// Owns copies of the scope identifiers and the user's role strings, so it
/// stays valid independently of the entities it was built from.
#[derive(Debug, Clone)]
pub struct ProjectPermissionContext {
    /// Organization display name.
    pub organization: String,
    /// Edition short name, when the scope has one.
    pub edition: Option<String>,
    /// Project scope id, when the scope has one.
    pub project: Option<String>,
    /// The user's encoded role strings.
    pub roles: BTreeSet<String>,
}

impl ProjectPermissionContext {
    /// Context for a user against a project.
    #[must_use]
    pub fn for_project(user: &User, project: &Project) -> Self {
        Self {
            organization: project.organization_name().to_string(),
            edition: Some(project.edition_short_name().to_string()),
            project: Some(project.crowd_scope_id.clone()),
            roles: user.roles.clone(),
        }
    }

    /// Context for a user against an organization (no edition/project).
    #[must_use]
    pub fn for_organization(user: &User, organization: &Organization) -> Self {
        Self {
            organization: organization.name.clone(),
            edition: None,
            project: None,
            roles: user.roles.clone(),
        }
    }

    /// Resolve the full decision for the given permission.
    #[must_use]
    pub fn check<C>(&self, permission: Role, canonicalizer: &C) -> Decision
    where
        C: ScopeCanonicalizer + ?Sized,
    {
        let mut query = ScopeQuery::for_organization(&self.organization);
        if let Some(edition) = self.edition.as_deref() {
            query = query.with_edition(edition);
        }
        if let Some(project) = self.project.as_deref() {
            query = query.with_project(project);
        }
        resolve_permission(&self.roles, permission, &query, canonicalizer)
    }

    /// Check if the user has the specified permission.
    #[must_use]
    pub fn has_permission<C>(&self, permission: Role, canonicalizer: &C) -> bool
    where
        C: ScopeCanonicalizer + ?Sized,
    {
        self.check(permission, canonicalizer).is_granted()
    }

    /// Require that the user has the specified permission.
    ///
    /// Returns `Ok(())` if granted, or `Err(PermissionError::MissingPermission)`.
    pub fn require_permission<C>(
        &self,
        permission: Role,
        canonicalizer: &C,
    ) -> Result<(), PermissionError>
    where
        C: ScopeCanonicalizer + ?Sized,
    {
        if self.has_permission(permission, canonicalizer) {
            Ok(())
        } else {
            Err(PermissionError::MissingPermission(permission))
        }
    }
}

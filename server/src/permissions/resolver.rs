//! Permission resolution logic.
//!
//! Decides whether a set of role strings grants a permission at a given
//! (organization, edition, project) scope.
//!
//! Resolution order, per role string:
//! 1. Organization gate: wildcard or canonical organization token
//! 2. Edition gate: wildcard, exact token, or the null-edition special cases
//! 3. Project gate: wildcard, exact scope id, or the null-project VIEWER case
//! 4. Permission gate: wildcard, exact token, or implied VIEWER
//!
//! The first role string passing all four gates grants access. Any malformed
//! role string fails the whole check closed: the decision is
//! [`Decision::DeniedMalformed`], never an error to the caller.

use serde::Serialize;
use tracing::{trace, warn};

use super::canonical::ScopeCanonicalizer;
use super::grant::{RoleGrant, WILDCARD};
use super::roles::Role;

/// The scope a permission check runs against.
///
/// `None` fields widen the check: no organization means the organization
/// token is the literal wildcard, no edition means an organization-level
/// check, no project means no project context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopeQuery<'a> {
    /// Organization display name; canonicalized before comparison.
    pub organization: Option<&'a str>,
    /// Edition short name; canonicalized before comparison.
    pub edition: Option<&'a str>,
    /// Project scope id, compared case-insensitively as-is.
    pub project: Option<&'a str>,
}

impl<'a> ScopeQuery<'a> {
    /// A query with no scope at all; only organization-wildcard grants apply.
    #[must_use]
    pub const fn global() -> Self {
        Self {
            organization: None,
            edition: None,
            project: None,
        }
    }

    /// An organization-level query.
    #[must_use]
    pub const fn for_organization(name: &'a str) -> Self {
        Self {
            organization: Some(name),
            edition: None,
            project: None,
        }
    }

    /// Narrow the query to an edition.
    #[must_use]
    pub const fn with_edition(mut self, short_name: &'a str) -> Self {
        self.edition = Some(short_name);
        self
    }

    /// Narrow the query to a project.
    #[must_use]
    pub const fn with_project(mut self, scope_id: &'a str) -> Self {
        self.project = Some(scope_id);
        self
    }
}

/// Outcome of a permission check.
///
/// Malformed input is distinguishable from an ordinary denial so tests and
/// audit logging can tell "correctly denied" from "denied because a role
/// string would not parse"; both deny access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// A role string passed all four gates.
    Granted,
    /// No role string passed all four gates.
    Denied,
    /// A role string failed to parse; evaluation abandoned fail-closed.
    DeniedMalformed {
        /// The offending role string, as supplied.
        role: String,
    },
}

impl Decision {
    /// Whether access was granted.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Resolve whether `roles` grants `permission` at the queried scope.
///
/// Pure function of its inputs: reads the caller's role strings, mutates
/// nothing, never returns an error. Order among role strings is irrelevant —
/// the result is a boolean OR over grants, and malformed strings deny
/// regardless of position (the whole set is parsed before any matching).
pub fn resolve_permission<I, S, C>(
    roles: I,
    permission: Role,
    query: &ScopeQuery<'_>,
    canonicalizer: &C,
) -> Decision
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: ScopeCanonicalizer + ?Sized,
{
    let organization_token = query.organization.map_or_else(
        || WILDCARD.to_string(),
        |name| canonicalizer.canonical_token(name),
    );
    let edition_token = query.edition.map(|name| canonicalizer.canonical_token(name));
    let project_id = query.project.map(str::to_lowercase);

    // Parse the whole set before matching so the outcome cannot depend on
    // iteration order when a grant and a malformed string coexist.
    let mut grants = Vec::new();
    for role in roles {
        let raw = role.as_ref();
        match RoleGrant::parse(raw) {
            Ok(grant) => grants.push(grant),
            Err(_) => {
                warn!(role = raw, "rejecting malformed role string, failing closed");
                return Decision::DeniedMalformed {
                    role: raw.to_string(),
                };
            }
        }
    }

    for grant in &grants {
        if !grant.organization.matches(&organization_token) {
            continue;
        }
        if !edition_gate(grant, permission, edition_token.as_deref()) {
            continue;
        }
        if !project_gate(grant, permission, project_id.as_deref()) {
            continue;
        }
        if grant.grants_permission(permission) {
            trace!(?grant, %permission, "permission granted");
            return Decision::Granted;
        }
    }

    Decision::Denied
}

/// Boolean wrapper over [`resolve_permission`].
pub fn has_permission<I, S, C>(
    roles: I,
    permission: Role,
    query: &ScopeQuery<'_>,
    canonicalizer: &C,
) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: ScopeCanonicalizer + ?Sized,
{
    resolve_permission(roles, permission, query, canonicalizer).is_granted()
}

/// Edition gate. With no edition in the query, an edition-scoped grant still
/// counts for ADMIN when its project segment is the wildcard, and for VIEWER
/// always.
fn edition_gate(grant: &RoleGrant, requested: Role, edition_token: Option<&str>) -> bool {
    if grant.edition.is_wildcard() {
        return true;
    }
    match edition_token {
        None => {
            (grant.project.is_wildcard() && requested == Role::Admin) || requested == Role::Viewer
        }
        Some(token) => grant.edition.matches(token),
    }
}

/// Project gate. With no project in the query, a project-scoped grant still
/// counts for VIEWER.
fn project_gate(grant: &RoleGrant, requested: Role, project_id: Option<&str>) -> bool {
    if grant.project.is_wildcard() {
        return true;
    }
    match project_id {
        None => requested == Role::Viewer,
        Some(id) => grant.project.matches(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::canonical::DefaultCanonicalizer;

    const CANON: DefaultCanonicalizer = DefaultCanonicalizer;

    fn check(roles: &[&str], permission: Role, query: &ScopeQuery<'_>) -> Decision {
        resolve_permission(roles, permission, query, &CANON)
    }

    // === Global Wildcard ===

    #[test]
    fn test_global_wildcard_grants_everything() {
        let roles = ["all-all-all-all"];
        let queries = [
            ScopeQuery::global(),
            ScopeQuery::for_organization("OrgA"),
            ScopeQuery::for_organization("OrgA").with_edition("int"),
            ScopeQuery::for_organization("OrgA")
                .with_edition("int")
                .with_project("dentistry"),
        ];
        for query in &queries {
            for role in Role::all() {
                assert_eq!(check(&roles, *role, query), Decision::Granted);
            }
        }
    }

    // === Organization Gate ===

    #[test]
    fn test_org_scoped_admin_grants_under_that_org_only() {
        let roles = ["orga-all-all-admin"];
        let under_orga = ScopeQuery::for_organization("OrgA")
            .with_edition("int")
            .with_project("dentistry");
        let under_orgb = ScopeQuery::for_organization("OrgB")
            .with_edition("int")
            .with_project("dentistry");

        assert_eq!(check(&roles, Role::Admin, &under_orga), Decision::Granted);
        assert_eq!(check(&roles, Role::Admin, &under_orgb), Decision::Denied);
    }

    #[test]
    fn test_no_organization_means_wildcard_token() {
        // With no organization in the query, only organization-wildcard
        // grants can pass the first gate.
        let query = ScopeQuery::global();
        assert_eq!(
            check(&["all-all-all-admin"], Role::Admin, &query),
            Decision::Granted
        );
        assert_eq!(
            check(&["orga-all-all-admin"], Role::Admin, &query),
            Decision::Denied
        );
    }

    #[test]
    fn test_organization_name_is_canonicalized() {
        // Display name "Org A" canonicalizes to the token "orga".
        let roles = ["orga-all-all-author"];
        let query = ScopeQuery::for_organization("Org A").with_edition("int");
        assert_eq!(check(&roles, Role::Author, &query), Decision::Granted);
    }

    // === Edition Gate ===

    #[test]
    fn test_edition_scoped_grant_matches_its_edition_only() {
        let roles = ["orga-ed1-all-author"];
        let ed1 = ScopeQuery::for_organization("OrgA").with_edition("ed1");
        let ed2 = ScopeQuery::for_organization("OrgA").with_edition("ed2");

        assert_eq!(check(&roles, Role::Author, &ed1), Decision::Granted);
        assert_eq!(check(&roles, Role::Author, &ed2), Decision::Denied);
    }

    #[test]
    fn test_org_level_admin_check_accepts_edition_grant_with_project_wildcard() {
        // Edition-scoped admin with a wildcard project counts at
        // organization level.
        let roles = ["orga-ed1-all-admin"];
        let query = ScopeQuery::for_organization("OrgA");
        assert_eq!(check(&roles, Role::Admin, &query), Decision::Granted);
    }

    #[test]
    fn test_org_level_admin_check_rejects_project_scoped_grant() {
        let roles = ["orga-ed1-proj1-admin"];
        let query = ScopeQuery::for_organization("OrgA");
        assert_eq!(check(&roles, Role::Admin, &query), Decision::Denied);
    }

    #[test]
    fn test_org_level_viewer_check_accepts_any_edition_grant() {
        let roles = ["orga-ed1-proj1-author"];
        let query = ScopeQuery::for_organization("OrgA");
        assert_eq!(check(&roles, Role::Viewer, &query), Decision::Granted);
    }

    #[test]
    fn test_org_level_author_check_rejects_edition_scoped_grant() {
        let roles = ["orga-ed1-all-author"];
        let query = ScopeQuery::for_organization("OrgA");
        assert_eq!(check(&roles, Role::Author, &query), Decision::Denied);
    }

    // === Project Gate ===

    #[test]
    fn test_project_scoped_grant_matches_its_project_only() {
        let roles = ["orga-ed1-proj1-author"];
        let base = ScopeQuery::for_organization("OrgA").with_edition("ed1");

        assert_eq!(
            check(&roles, Role::Author, &base.with_project("proj1")),
            Decision::Granted
        );
        assert_eq!(
            check(&roles, Role::Author, &base.with_project("proj2")),
            Decision::Denied
        );
    }

    #[test]
    fn test_no_project_in_query_still_grants_viewer() {
        let roles = ["orga-ed1-proj1-author"];
        let query = ScopeQuery::for_organization("OrgA").with_edition("ed1");

        assert_eq!(check(&roles, Role::Viewer, &query), Decision::Granted);
        assert_eq!(check(&roles, Role::Author, &query), Decision::Denied);
    }

    #[test]
    fn test_project_id_comparison_is_case_insensitive() {
        let roles = ["orga-ed1-dentistry-author"];
        let query = ScopeQuery::for_organization("OrgA")
            .with_edition("ed1")
            .with_project("Dentistry");
        assert_eq!(check(&roles, Role::Author, &query), Decision::Granted);
    }

    // === Permission Gate ===

    #[test]
    fn test_viewer_implied_by_any_passing_grant() {
        for roles in [["orga-ed1-proj1-author"], ["orga-ed1-proj1-reviewer"]] {
            let query = ScopeQuery::for_organization("OrgA")
                .with_edition("ed1")
                .with_project("proj1");
            assert_eq!(check(&roles, Role::Viewer, &query), Decision::Granted);
        }
    }

    #[test]
    fn test_trailing_wildcard_grants_any_permission() {
        let roles = ["orga-ed1-proj1-all"];
        let query = ScopeQuery::for_organization("OrgA")
            .with_edition("ed1")
            .with_project("proj1");
        for role in Role::all() {
            assert_eq!(check(&roles, *role, &query), Decision::Granted);
        }
    }

    #[test]
    fn test_wrong_permission_token_is_denied() {
        let roles = ["orga-ed1-proj1-author"];
        let query = ScopeQuery::for_organization("OrgA")
            .with_edition("ed1")
            .with_project("proj1");
        assert_eq!(check(&roles, Role::Admin, &query), Decision::Denied);
    }

    // === Fail-Closed Behavior ===

    #[test]
    fn test_malformed_only_set_denies_everything_without_panicking() {
        let roles = ["bad"];
        let queries = [
            ScopeQuery::global(),
            ScopeQuery::for_organization("OrgA")
                .with_edition("int")
                .with_project("dentistry"),
        ];
        for query in &queries {
            for role in Role::all() {
                let decision = check(&roles, *role, query);
                assert_eq!(
                    decision,
                    Decision::DeniedMalformed { role: "bad".into() }
                );
                assert!(!decision.is_granted());
            }
        }
    }

    #[test]
    fn test_malformed_entry_poisons_the_whole_set() {
        // A valid global grant does not survive a malformed sibling; the
        // check fails closed regardless of set ordering.
        let query = ScopeQuery::for_organization("OrgA");
        for roles in [["all-all-all-all", "bad"], ["bad", "all-all-all-all"]] {
            assert_eq!(
                check(&roles, Role::Admin, &query),
                Decision::DeniedMalformed { role: "bad".into() }
            );
        }
    }

    #[test]
    fn test_empty_role_set_is_denied() {
        let roles: [&str; 0] = [];
        assert_eq!(
            check(&roles, Role::Viewer, &ScopeQuery::global()),
            Decision::Denied
        );
    }

    // === Set Semantics ===

    #[test]
    fn test_any_grant_in_the_set_suffices() {
        let roles = ["orgb-all-all-admin", "orga-ed1-proj1-author"];
        let query = ScopeQuery::for_organization("OrgA")
            .with_edition("ed1")
            .with_project("proj1");
        assert_eq!(check(&roles, Role::Author, &query), Decision::Granted);
    }

    #[test]
    fn test_role_strings_are_case_insensitive() {
        let roles = ["ORGA-ED1-PROJ1-AUTHOR"];
        let query = ScopeQuery::for_organization("OrgA")
            .with_edition("ed1")
            .with_project("proj1");
        assert_eq!(check(&roles, Role::Author, &query), Decision::Granted);
    }

    #[test]
    fn test_works_over_owned_string_collections() {
        use std::collections::BTreeSet;

        let roles: BTreeSet<String> = ["orga-all-all-admin".to_string()].into();
        let query = ScopeQuery::for_organization("OrgA");
        assert!(has_permission(&roles, Role::Admin, &query, &CANON));
    }

    // === Decision Serialization ===

    #[test]
    fn test_decision_serializes_with_tag() {
        let json = serde_json::to_string(&Decision::Granted).unwrap();
        assert_eq!(json, r#"{"decision":"granted"}"#);

        let json = serde_json::to_string(&Decision::DeniedMalformed { role: "bad".into() }).unwrap();
        assert!(json.contains("denied_malformed"));
        assert!(json.contains("bad"));
    }
}

//! Permission system types and utilities.
//!
//! Role strings encode a grant as `<organization>-<edition>-<project>-<permission>`,
//! where each scope segment may be the wildcard `all`. The resolver walks the
//! three scope gates in order (organization, edition, project) and then the
//! permission gate; the first role string passing all four grants access.

pub mod canonical;
pub mod crowd;
pub mod error;
pub mod grant;
pub mod helpers;
pub mod resolver;
pub mod roles;

pub use canonical::{DefaultCanonicalizer, ScopeCanonicalizer};
pub use crowd::CrowdGroup;
pub use error::PermissionError;
pub use grant::{RoleGrant, ScopeSegment, WILDCARD};
pub use helpers::ProjectPermissionContext;
pub use resolver::{has_permission, resolve_permission, Decision, ScopeQuery};
pub use roles::Role;

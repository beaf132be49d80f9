//! Domain Types
//!
//! Entities of the terminology platform that feed the permission layer:
//! organizations own editions, editions contain projects, and users carry
//! the flat set of encoded role strings assigned at authentication time.

pub mod organization;
pub mod project;
pub mod user;

pub use organization::{Edition, Organization};
pub use project::Project;
pub use user::User;

//! `RefsetTools` Server Core
//!
//! Domain and permission layer of the terminology reference-set management
//! platform. The web tier sits on top of this crate; persistence and
//! authentication are external collaborators.

pub mod config;
pub mod permissions;

//! `RefsetTools` Common Library
//!
//! Shared domain types used by the permission layer and the web tier.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

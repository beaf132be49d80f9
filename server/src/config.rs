//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{ensure, Result};
use std::env;

/// Default application token prefixing crowd group strings.
pub const DEFAULT_APPLICATION_TOKEN: &str = "rt2";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application token recognized as an optional leading segment of crowd
    /// group strings (default: "rt2")
    pub application_token: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let application_token = env::var("RT_APPLICATION_TOKEN")
            .unwrap_or_else(|_| DEFAULT_APPLICATION_TOKEN.into())
            .trim()
            .to_lowercase();
        ensure!(
            !application_token.is_empty(),
            "RT_APPLICATION_TOKEN must not be blank"
        );
        Ok(Self { application_token })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_token: DEFAULT_APPLICATION_TOKEN.into(),
        }
    }
}

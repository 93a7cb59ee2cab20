//! Editor configuration

use std::env;

use anyhow::{Context, Result};
use sceneprops_domain::UnknownTokenPolicy;

/// Log filter used when `RUST_LOG` is unset: the binary and both crates
pub const DEFAULT_LOG_FILTER: &str = "sceneprops=info,sceneprops_editor=info,sceneprops_domain=info";

/// Editor configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// How enumerated transformers treat tokens outside their option set
    pub unknown_token_policy: UnknownTokenPolicy,
    /// Pretty-print JSON output
    pub pretty_output: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            unknown_token_policy: UnknownTokenPolicy::Reject,
            pretty_output: true,
        }
    }
}

impl EditorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test fixtures)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            unknown_token_policy: lookup("SCENEPROPS_UNKNOWN_TOKEN")
                .unwrap_or_else(|| "reject".to_string())
                .parse::<UnknownTokenPolicy>()
                .map_err(anyhow::Error::msg)
                .context("SCENEPROPS_UNKNOWN_TOKEN must be 'reject' or 'fallback'")?,

            pretty_output: lookup("SCENEPROPS_PRETTY")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("SCENEPROPS_PRETTY must be 'true' or 'false'")?,
        })
    }
}

//! Relay configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for the completion relay, loaded from `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Model identifier sent to the completion provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated tokens per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

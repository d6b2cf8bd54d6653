//! Configuration loading for ARIA.
//!
//! Reads `config.toml` into [`RelayConfig`], falling back to defaults when
//! the file is missing or malformed. The Anthropic API key comes from the
//! `ANTHROPIC_API_KEY` environment variable and is wrapped in
//! [`SecretString`] immediately; it never lives in the config file.

use std::path::Path;

use secrecy::SecretString;

use aria_types::config::RelayConfig;

/// Environment variable holding the Anthropic API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Load relay configuration from a TOML file.
///
/// - If the file does not exist, returns [`RelayConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_relay_config(path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            RelayConfig::default()
        }
    }
}

/// Resolve the provider API key from the environment.
///
/// Returns `None` when the variable is unset or empty; the missing credential
/// surfaces as a relay-call failure on first use, not a startup crash.
pub fn resolve_api_key() -> Option<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_relay_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_relay_config(&tmp.path().join("config.toml")).await;
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);
    }

    #[tokio::test]
    async fn load_relay_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
model = "claude-opus-4-20250514"
max_tokens = 2048
"#,
        )
        .await
        .unwrap();

        let config = load_relay_config(&config_path).await;
        assert_eq!(config.model, "claude-opus-4-20250514");
        assert_eq!(config.max_tokens, 2048);
    }

    #[tokio::test]
    async fn load_relay_config_partial_toml_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, r#"model = "claude-haiku-3-5-20250514""#)
            .await
            .unwrap();

        let config = load_relay_config(&config_path).await;
        assert_eq!(config.model, "claude-haiku-3-5-20250514");
        assert_eq!(config.max_tokens, 1024);
    }

    #[tokio::test]
    async fn load_relay_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_relay_config(&config_path).await;
        assert_eq!(config.model, "claude-sonnet-4-20250514");
    }

    #[test]
    fn resolve_api_key_missing_returns_none() {
        // SAFETY: This test runs serially and the var is cleared before use.
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(resolve_api_key().is_none());
    }
}

//! Application state wiring the relay together.
//!
//! `AppState` holds the shared [`CompletionRelay`] used by the HTTP handlers.
//! The provider is constructed explicitly from configuration at startup and
//! injected, so handler tests can substitute a stub provider.

use std::path::Path;
use std::sync::Arc;

use aria_core::relay::CompletionRelay;
use aria_core::relay::box_provider::BoxCompletionProvider;
use aria_infra::anthropic::AnthropicProvider;
use aria_infra::config::{API_KEY_ENV, load_relay_config, resolve_api_key};

/// Shared application state for the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<CompletionRelay>,
}

impl AppState {
    /// Wrap an already-built relay (used by tests with stub providers).
    pub fn new(relay: CompletionRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }

    /// Initialize from `config.toml` and the environment.
    ///
    /// A missing API key is not an error here: it surfaces as a relay-call
    /// failure on the first completion attempt.
    pub async fn init() -> anyhow::Result<Self> {
        let config = load_relay_config(Path::new("config.toml")).await;

        let api_key = resolve_api_key();
        if api_key.is_none() {
            tracing::warn!("{API_KEY_ENV} is not set; completions will fail until it is");
        }

        let provider = AnthropicProvider::new(api_key);
        let relay = CompletionRelay::new(
            BoxCompletionProvider::new(provider),
            config.model,
            config.max_tokens,
        );

        Ok(Self::new(relay))
    }
}

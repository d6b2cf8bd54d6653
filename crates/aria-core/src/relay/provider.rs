//! CompletionProvider trait definition.
//!
//! This is the abstraction the relay calls into. Uses native async fn in
//! traits (RPITIT, Rust 2024 edition); implementations live in `aria-infra`
//! (e.g., `AnthropicProvider`).

use aria_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

//! CompletionRelay -- stateless forwarder from conversation payloads to the
//! completion provider.
//!
//! The relay attaches the fixed system instruction, the configured model, and
//! the output-token bound, then returns the provider's text. Every provider
//! failure comes back as a structured [`RelayError`]; nothing panics or
//! escapes as a raw fault.

use tracing::debug;

use aria_types::error::RelayError;
use aria_types::llm::CompletionRequest;
use aria_types::message::Message;

use super::box_provider::BoxCompletionProvider;
use super::prompt::SYSTEM_PROMPT;

/// Forwards conversations to the completion provider.
///
/// Holds no per-conversation state, so a single instance is safe to share
/// behind an `Arc` across any number of concurrent sessions.
pub struct CompletionRelay {
    provider: BoxCompletionProvider,
    model: String,
    max_tokens: u32,
}

impl CompletionRelay {
    /// Create a relay with an injected provider and model configuration.
    pub fn new(provider: BoxCompletionProvider, model: String, max_tokens: u32) -> Self {
        Self {
            provider,
            model,
            max_tokens,
        }
    }

    /// Model identifier this relay requests completions with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Forward `conversation` to the provider and return the generated text.
    ///
    /// The conversation must be non-empty. The system instruction is
    /// prepended here; callers never see or supply it.
    pub async fn complete(&self, conversation: Vec<Message>) -> Result<String, RelayError> {
        if conversation.is_empty() {
            return Err(RelayError::EmptyConversation);
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: conversation,
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: self.max_tokens,
        };

        let response = self.provider.complete(&request).await?;
        debug!(
            provider = self.provider.name(),
            model = %response.model,
            stop_reason = %response.stop_reason,
            output_tokens = response.usage.output_tokens,
            "completion finished"
        );

        Ok(response.content)
    }
}

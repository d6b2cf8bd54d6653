//! HTTP client for the relay endpoint.
//!
//! `HttpRelay` implements [`TranscriptRelay`] over `POST /api/chat`. The
//! response body is parsed the same way for every status code: a parsed body
//! with `error` set is a relay-reported failure, while an unreachable
//! endpoint or an unparseable body is a transport failure.
//!
//! No timeout is configured: the relay call is the session's single
//! suspension point and is never cancelled.

use aria_core::session::relay::TranscriptRelay;
use aria_types::error::TransportError;
use aria_types::message::Message;
use aria_types::wire::{ChatRequest, RelayReply};

/// Relay client speaking the `POST /api/chat` wire contract.
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    /// Create a relay client for a server base URL
    /// (e.g. `http://127.0.0.1:8787`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the chat endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TranscriptRelay for HttpRelay {
    async fn complete(&self, conversation: Vec<Message>) -> Result<RelayReply, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest {
                messages: conversation,
            })
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        response
            .json::<RelayReply>()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }
}

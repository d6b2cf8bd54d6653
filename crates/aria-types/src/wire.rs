//! Wire contract for the relay endpoint.
//!
//! `POST /api/chat` takes a [`ChatRequest`] and answers either
//! `200` with a [`ChatCompletion`] or `500` with a [`ChatFailure`].
//! [`RelayReply`] is the client-side view of either body.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Success body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub text: String,
}

/// Failure body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatFailure {
    pub error: String,
}

/// A relay response as the chat client sees it, before folding it into the
/// transcript.
///
/// Both fields are optional: the client picks `text` when present and
/// non-empty, then `error`, then a fixed fallback. The body is parsed this
/// way regardless of the HTTP status code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayReply {
    /// A reply carrying generated text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            error: None,
        }
    }

    /// A reply carrying a relay-reported error.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            text: None,
            error: Some(error.into()),
        }
    }
}

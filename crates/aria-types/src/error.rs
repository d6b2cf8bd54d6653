use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the completion relay.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("conversation must contain at least one message")]
    EmptyConversation,

    #[error(transparent)]
    Completion(#[from] LlmError),
}

/// Client-side transport failures when calling the relay endpoint.
///
/// A relay-reported error is not a transport failure: it arrives as a parsed
/// reply body with `error` set.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_display() {
        let err = RelayError::EmptyConversation;
        assert_eq!(
            err.to_string(),
            "conversation must contain at least one message"
        );
    }

    #[test]
    fn test_relay_error_transparent_completion() {
        let err = RelayError::from(LlmError::AuthenticationFailed);
        assert_eq!(err.to_string(), "authentication failed");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}

//! Application error type mapping to the relay wire contract.
//!
//! The contract has exactly one failure shape: every error maps to
//! `500 { "error": "API error: <message>" }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use aria_types::error::RelayError;
use aria_types::wire::ChatFailure;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Relay or provider failure.
    Relay(RelayError),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Relay(err) = self;
        let body = ChatFailure {
            error: format!("API error: {err}"),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

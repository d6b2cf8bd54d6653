//! Relay completion endpoint.
//!
//! POST /api/chat
//!
//! Request body: `{ "messages": [ {"role","content"}, ... ] }` with at least
//! one entry and roles in {user, assistant}. Success: `200 { "text": ... }`.
//! Any failure: `500 { "error": ... }`.

use axum::Json;
use axum::extract::State;
use tracing::info;

use aria_types::wire::{ChatCompletion, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat -- forward a conversation to the completion provider.
pub async fn complete_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatCompletion>, AppError> {
    info!(messages = body.messages.len(), "relay request");
    let text = state.relay.complete(body.messages).await?;
    Ok(Json(ChatCompletion { text }))
}

//! HTTP layer for the ARIA relay.
//!
//! Axum-based API exposing the relay wire contract with CORS and request
//! tracing. Unknown paths fall through to the static web UI when one is
//! present on disk.

pub mod error;
pub mod handlers;
pub mod router;

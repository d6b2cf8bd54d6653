//! Shared domain types for ARIA.
//!
//! This crate contains the types used across the ARIA relay and chat client:
//! transcript messages, the relay wire contract, completion provider
//! request/response shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod message;
pub mod wire;

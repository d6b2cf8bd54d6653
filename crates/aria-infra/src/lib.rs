//! Infrastructure layer for ARIA.
//!
//! Contains implementations of the ports defined in `aria-core`: the
//! Anthropic completion provider, the HTTP relay client used by the terminal
//! chat client, and configuration loading.

pub mod anthropic;
pub mod config;
pub mod relay_client;

//! Anthropic Claude completion provider.
//!
//! This module provides the [`AnthropicProvider`] which implements the
//! [`CompletionProvider`](aria_core::relay::provider::CompletionProvider)
//! trait for the Anthropic Messages API.

pub mod client;
pub mod types;

pub use client::AnthropicProvider;

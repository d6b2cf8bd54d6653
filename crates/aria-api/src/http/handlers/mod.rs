//! HTTP request handlers for the relay API.

pub mod chat;

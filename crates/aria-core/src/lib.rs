//! Business logic for ARIA: the conversation-session state machine and the
//! completion relay.
//!
//! This crate defines the "ports" (provider and relay traits) that the
//! infrastructure layer implements. It depends only on `aria-types` -- never
//! on `aria-infra` or any HTTP crate.

pub mod relay;
pub mod session;

//! Conversation session state machine.
//!
//! [`ChatSession`] owns the ordered transcript, the pending input buffer, and
//! the single-request-in-flight state. It performs no IO: drivers (the
//! terminal client) render the transcript, perform the relay call, and feed
//! the outcome back in through [`ChatSession::settle`].

pub mod actions;
pub mod relay;
pub mod transcript;

pub use transcript::{ChatSession, SessionState};

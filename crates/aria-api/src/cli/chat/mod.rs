//! Interactive terminal chat client.
//!
//! Drives a `ChatSession` against the relay endpoint: readline input,
//! quick-action slash commands, the forum-paste flow, markdown rendering,
//! and a spinner while a reply is outstanding.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;

//! Async readline input handling for the chat client.
//!
//! Wraps `rustyline_async::Readline` to provide async line reading with
//! proper handling of EOF (Ctrl+D) and interrupt (Ctrl+C) signals, plus a
//! line-collection mode for the forum-paste flow.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a message.
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler wrapping rustyline_async.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create a new chat input handler with the given initial prompt.
    ///
    /// Returns the input handler and a `SharedWriter` that can be used to
    /// print output without interfering with the readline prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Read a line of input.
    ///
    /// Returns an `InputEvent` indicating what the user did:
    /// - `Message(text)` for a submitted line
    /// - `Eof` for Ctrl+D
    /// - `Interrupted` for Ctrl+C
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                let trimmed = line.trim().to_string();
                InputEvent::Message(trimmed)
            }
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Collect pasted lines until a lone `/end`, for the forum-paste flow.
    ///
    /// Lines are kept verbatim. Ctrl+D finishes the paste like `/end`;
    /// Ctrl+C aborts it and returns `None`.
    pub async fn read_paste(&mut self) -> Option<String> {
        let mut lines: Vec<String> = Vec::new();
        loop {
            match self.rl.readline().await {
                Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                    if line.trim() == "/end" {
                        return Some(lines.join("\n"));
                    }
                    lines.push(line);
                }
                Ok(rustyline_async::ReadlineEvent::Eof) => return Some(lines.join("\n")),
                Ok(rustyline_async::ReadlineEvent::Interrupted) => return None,
                Err(_) => return None,
            }
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}

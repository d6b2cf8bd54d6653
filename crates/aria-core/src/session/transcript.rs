//! ChatSession -- the conversation-session state machine.
//!
//! Owns the ordered transcript, the pending input buffer, and the busy state.
//! [`ChatSession::submit`] turns user intent into an outbound conversation
//! payload; [`ChatSession::settle`] folds the relay's reply (or failure) back
//! into the transcript and returns the session to idle. Exactly one relay
//! call may be outstanding; further submissions are rejected until it
//! settles. Nothing here is persisted -- the transcript lives and dies with
//! the session.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use aria_types::message::{Message, MessageRole};
use aria_types::wire::RelayReply;

/// Assistant greeting seeded at transcript index 0.
///
/// Local to the client; it is excluded from every outbound payload because it
/// was never produced by the completion provider.
pub const WELCOME_MESSAGE: &str = "Hello! I'm ARIA — your AI Research Intelligence Agent. 🤖\n\nI'm ready to:\n• 📰 Deliver your daily AI briefing\n• 🔍 Scan & summarize forum content from Moltbook\n• 💡 Answer questions about the AI space\n\nTry asking: \"Give me today's AI summary\" or paste any Moltbook forum content for me to analyze!";

/// Shown when the relay replied but carried neither text nor an error.
pub const FALLBACK_REPLY: &str = "Something went wrong, try again!";

/// Shown when the relay endpoint was unreachable or returned an unparseable
/// response.
pub const CONNECTION_ERROR_REPLY: &str = "⚠️ Connection error. Please try again.";

/// Whether a relay call is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// A single conversation session.
///
/// The transcript is append-only: turns are never edited or removed once
/// appended. The id and start time exist for the banner and tracing only.
pub struct ChatSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    transcript: Vec<Message>,
    pending: String,
    state: SessionState,
}

impl ChatSession {
    /// Create a session seeded with the standard greeting.
    pub fn new() -> Self {
        Self::with_welcome(WELCOME_MESSAGE)
    }

    /// Create a session seeded with a custom greeting.
    pub fn with_welcome(welcome: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            transcript: vec![Message::assistant(welcome)],
            pending: String::new(),
            state: SessionState::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The full transcript, welcome turn included.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a relay call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.state == SessionState::AwaitingResponse
    }

    /// Current pending input buffer.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replace the pending input buffer.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Discard the pending input buffer.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Append a turn to the transcript.
    pub fn append_message(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Submit the pending buffer, or `override_text` for quick actions and
    /// the forum-paste flow.
    ///
    /// Returns the conversation payload for the relay call, or `None` when
    /// the submission is rejected: the resolved text is empty or
    /// whitespace-only, or a relay call is already outstanding. Rejection
    /// mutates nothing.
    ///
    /// On acceptance the user turn is appended, the buffer is cleared, and
    /// the session stays busy until [`settle`](Self::settle) is called.
    pub fn submit(&mut self, override_text: Option<&str>) -> Option<Vec<Message>> {
        if self.is_busy() {
            return None;
        }

        let text = match override_text {
            Some(text) => text.to_string(),
            None => self.pending.trim().to_string(),
        };
        if text.trim().is_empty() {
            return None;
        }

        self.transcript.push(Message::user(text));
        self.pending.clear();
        self.state = SessionState::AwaitingResponse;
        Some(self.outbound_payload())
    }

    /// Fold a relay outcome back into the transcript and return to idle.
    ///
    /// Reply text wins when present and non-empty, then a relay-reported
    /// error verbatim, then [`FALLBACK_REPLY`]. Any transport failure becomes
    /// [`CONNECTION_ERROR_REPLY`]. The transition back to idle is
    /// unconditional; the appended assistant turn is returned for rendering.
    pub fn settle<E>(&mut self, outcome: Result<RelayReply, E>) -> &Message {
        let content = match outcome {
            Ok(reply) => reply
                .text
                .filter(|text| !text.is_empty())
                .or(reply.error)
                .unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            Err(_) => CONNECTION_ERROR_REPLY.to_string(),
        };

        self.transcript.push(Message::assistant(content));
        self.state = SessionState::Idle;
        &self.transcript[self.transcript.len() - 1]
    }

    /// The conversation as sent to the relay: the welcome turn (assistant at
    /// index 0) excluded, everything else in order.
    ///
    /// The exclusion is positional on purpose; a greeting seeded with role
    /// `user` would be sent.
    fn outbound_payload(&self) -> Vec<Message> {
        self.transcript
            .iter()
            .enumerate()
            .filter(|(index, message)| !(*index == 0 && message.role == MessageRole::Assistant))
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_types::error::TransportError;
    use aria_types::wire::ChatRequest;

    fn submit_text(session: &mut ChatSession, text: &str) -> Option<Vec<Message>> {
        session.set_pending(text);
        session.submit(None)
    }

    #[test]
    fn test_new_session_is_idle_with_welcome() {
        let session = ChatSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_busy());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, MessageRole::Assistant);
        assert_eq!(session.transcript()[0].content, WELCOME_MESSAGE);
        assert!(session.pending().is_empty());
    }

    #[test]
    fn test_submissions_preserve_text_and_order() {
        let mut session = ChatSession::new();

        for text in ["first", "second", "third"] {
            submit_text(&mut session, text).unwrap();
            session.settle::<TransportError>(Ok(RelayReply::text("ack")));
        }

        let user_turns: Vec<&str> = session
            .transcript()
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(user_turns, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_and_whitespace_submissions_are_rejected() {
        let mut session = ChatSession::new();

        assert!(submit_text(&mut session, "").is_none());
        assert!(submit_text(&mut session, "   \n\t").is_none());
        assert!(session.submit(Some("   ")).is_none());

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_submit_trims_pending_but_not_override() {
        let mut session = ChatSession::new();

        submit_text(&mut session, "  hello  ").unwrap();
        assert_eq!(session.transcript()[1].content, "hello");
        session.settle::<TransportError>(Ok(RelayReply::text("ack")));

        session.submit(Some("scan this \n")).unwrap();
        assert_eq!(session.transcript()[3].content, "scan this \n");
    }

    #[test]
    fn test_submit_while_busy_is_a_noop() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "first").unwrap();
        assert!(session.is_busy());

        let transcript_len = session.transcript().len();
        session.set_pending("second");
        assert!(session.submit(None).is_none());
        assert!(session.submit(Some("quick action")).is_none());

        assert_eq!(session.transcript().len(), transcript_len);
        assert_eq!(session.pending(), "second");
        assert!(session.is_busy());
    }

    #[test]
    fn test_submit_clears_pending_and_sets_busy() {
        let mut session = ChatSession::new();
        let payload = submit_text(&mut session, "hello").unwrap();

        assert!(session.pending().is_empty());
        assert!(session.is_busy());
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0], Message::user("hello"));
    }

    #[test]
    fn test_submit_excludes_welcome_message() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "one").unwrap();
        session.settle::<TransportError>(Ok(RelayReply::text("reply one")));

        let payload = submit_text(&mut session, "two").unwrap();

        // user, assistant, user -- never the welcome turn
        assert_eq!(payload.len(), 3);
        assert_eq!(payload[0], Message::user("one"));
        assert_eq!(payload[1], Message::assistant("reply one"));
        assert_eq!(payload[2], Message::user("two"));
        assert!(payload.iter().all(|m| m.content != WELCOME_MESSAGE));
    }

    #[test]
    fn test_welcome_with_user_role_is_not_excluded() {
        // Positional filtering checks the role too: a user-role first turn is
        // part of the payload.
        let mut session = ChatSession::with_welcome("ignored");
        session.transcript.clear();
        session.append_message(Message::user("seeded"));

        let payload = submit_text(&mut session, "hello").unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0], Message::user("seeded"));
    }

    #[test]
    fn test_settle_with_text_appends_assistant_turn() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "hi").unwrap();

        let reply = session.settle::<TransportError>(Ok(RelayReply::text("Hello")));
        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.content, "Hello");
        assert_eq!(session.transcript().len(), 3);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_settle_with_error_surfaces_it_verbatim() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "hi").unwrap();

        let reply = session.settle::<TransportError>(Ok(RelayReply::error("API error: boom")));
        assert_eq!(reply.content, "API error: boom");
        assert!(!session.is_busy());
    }

    #[test]
    fn test_settle_with_empty_reply_uses_fallback() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "hi").unwrap();

        let reply = session.settle::<TransportError>(Ok(RelayReply::default()));
        assert_eq!(reply.content, FALLBACK_REPLY);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_settle_with_empty_text_falls_through() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "hi").unwrap();

        let reply = session.settle::<TransportError>(Ok(RelayReply {
            text: Some(String::new()),
            error: Some("API error: empty".to_string()),
        }));
        assert_eq!(reply.content, "API error: empty");
    }

    #[test]
    fn test_settle_on_transport_failure_uses_connection_notice() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "hi").unwrap();

        let reply = session.settle(Err(TransportError::Request(
            "connection refused".to_string(),
        )));
        assert_eq!(reply.content, CONNECTION_ERROR_REPLY);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_session_usable_again_after_settle() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "first").unwrap();
        session.settle(Err(TransportError::Request("down".to_string())));

        let payload = submit_text(&mut session, "second").unwrap();
        assert_eq!(payload.last().unwrap().content, "second");
        assert!(session.is_busy());
    }

    #[test]
    fn test_payload_roundtrips_through_wire_format() {
        let mut session = ChatSession::new();
        submit_text(&mut session, "one").unwrap();
        session.settle::<TransportError>(Ok(RelayReply::text("reply")));
        let payload = submit_text(&mut session, "two").unwrap();

        let json = serde_json::to_string(&ChatRequest {
            messages: payload.clone(),
        })
        .unwrap();
        let parsed: ChatRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.messages, payload);
    }
}

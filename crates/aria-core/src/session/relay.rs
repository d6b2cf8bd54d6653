//! TranscriptRelay trait definition.
//!
//! The client-side port for the relay endpoint. Implementations live in
//! `aria-infra` (`HttpRelay`); tests use in-process stubs.

use aria_types::error::TransportError;
use aria_types::message::Message;
use aria_types::wire::RelayReply;

/// Client-side access to the completion relay.
///
/// One call per submission; there is no cancellation and no timeout, so the
/// returned future is the session's only suspension point.
pub trait TranscriptRelay: Send + Sync {
    /// Send a conversation payload and return the relay's reply.
    ///
    /// `Err` means the endpoint was unreachable or its response could not be
    /// parsed. A relay-reported failure is a successful [`RelayReply`] with
    /// `error` set.
    fn complete(
        &self,
        conversation: Vec<Message>,
    ) -> impl std::future::Future<Output = Result<RelayReply, TransportError>> + Send;
}

//! Errors surfaced by the conversation core.

use thiserror::Error;

/// Every failure here is recoverable and leaves the session as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The user tried to submit blank text.
    #[error("message is empty")]
    EmptyInput,
    /// A summary was requested for a session without messages.
    #[error("no conversation to summarize")]
    NoContent,
    /// Reply generation failed.
    #[error("failed to get response: {0}")]
    Synthesis(String),
    /// A reply is already pending for this conversation.
    #[error("a reply is already pending")]
    Busy,
}

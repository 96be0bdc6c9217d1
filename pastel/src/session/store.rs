//! Append-only message log for one conversation.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::ChatError;
use crate::models::{Message, Sender};

use super::Transcript;

/// One conversation's ordered message log.
///
/// Messages are only ever appended. Ids start at 1 and increase by one per
/// append, and `created_at` never decreases even if the clock does.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty session with a custom time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Append a message typed by the user.
    ///
    /// Blank text (after trimming) is rejected and nothing is appended.
    pub fn append_user_message(&mut self, text: &str) -> Result<Message, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        Ok(self.push(Sender::User, text.to_string()))
    }

    /// Append a message produced by the assistant. Empty text is accepted.
    pub fn append_assistant_message(&mut self, text: impl Into<String>) -> Message {
        self.push(Sender::Assistant, text.into())
    }

    fn push(&mut self, sender: Sender, content: String) -> Message {
        let mut created_at = self.clock.now();
        if let Some(last) = self.messages.last() {
            created_at = created_at.max(last.created_at);
        }

        let message = Message::new(self.next_id, sender, content, created_at);
        self.next_id += 1;
        self.messages.push(message.clone());

        debug!(session = %self.id, id = message.id, %sender, "appended message");
        message
    }

    /// Borrowed transcript view of the current messages.
    pub fn transcript(&self) -> Transcript<'_> {
        Transcript::new(&self.messages)
    }

    /// Render the transcript text. Empty session yields an empty string.
    pub fn build_transcript(&self) -> String {
        self.transcript().to_string()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

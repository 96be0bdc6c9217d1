//! Flattened text view of a session.

use std::fmt;

use crate::models::Message;

/// Borrowed view over a session's messages, rendered as one
/// `"<label>: <content>\n"` line per message.
#[derive(Debug, Clone, Copy)]
pub struct Transcript<'a> {
    messages: &'a [Message],
}

impl<'a> Transcript<'a> {
    pub const fn new(messages: &'a [Message]) -> Self {
        Self { messages }
    }

    /// Messages in append order.
    pub const fn entries(&self) -> &'a [Message] {
        self.messages
    }

    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.messages {
            writeln!(f, "{}: {}", message.sender.label(), message.content)?;
        }
        Ok(())
    }
}

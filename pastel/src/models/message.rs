//! Message model representing one entry in a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant.
    Assistant,
}

impl Sender {
    /// Stable lowercase name, used for serialization.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Label used when a message is rendered into a transcript.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "AI",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sequence number within the session, starting at 1.
    pub id: u64,
    /// Text of the message.
    pub content: String,
    /// Who sent it.
    pub sender: Sender,
    /// When the message was appended.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a message. Ids and timestamps are normally assigned by the session.
    pub fn new(id: u64, sender: Sender, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            sender,
            created_at,
        }
    }

    /// True if the user sent this message.
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_labels() {
        assert_eq!(Sender::User.label(), "User");
        assert_eq!(Sender::Assistant.label(), "AI");
    }

    #[test]
    fn serializes_sender_lowercase() {
        let msg = Message::new(1, Sender::Assistant, "hi".into(), Utc::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "assistant");
        assert_eq!(json["id"], 1);
    }
}

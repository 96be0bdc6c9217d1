//! Templated conversation summary.

use crate::error::ChatError;
use crate::session::Transcript;

/// How many leading messages contribute to the key topics line.
const TOPIC_MESSAGES: usize = 3;
/// How many leading words of each message are kept.
const TOPIC_WORDS: usize = 5;

const MAIN_POINTS: [&str; 3] = [
    "Engaged in thoughtful discussion",
    "Explored various concepts and ideas",
    "Maintained natural, human-like conversation flow",
];

/// Summarize a conversation.
///
/// Fails with [`ChatError::NoContent`] when `message_count` is zero, whatever
/// the transcript holds.
pub fn summarize(transcript: &Transcript<'_>, message_count: usize) -> Result<String, ChatError> {
    if message_count == 0 {
        return Err(ChatError::NoContent);
    }

    let topics = transcript
        .entries()
        .iter()
        .take(TOPIC_MESSAGES)
        .map(|message| leading_words(&message.content, TOPIC_WORDS))
        .collect::<Vec<_>>()
        .join(", ");

    let points = MAIN_POINTS
        .iter()
        .map(|point| format!("- {point}"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "**Conversation Summary:**\n\n\
         Key topics discussed: {topics}\n\n\
         Main points:\n{points}\n\n\
         Total messages exchanged: {message_count}"
    ))
}

// Splits on single spaces, so runs of spaces count as empty words.
pub(super) fn leading_words(text: &str, count: usize) -> String {
    text.split(' ').take(count).collect::<Vec<_>>().join(" ")
}

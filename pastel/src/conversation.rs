//! One chat exchange at a time over a session.
//!
//! A [`Conversation`] owns its [`Session`] and a reply generator. A single
//! permit gates submissions: while a reply is pending, further submissions
//! and summaries are refused with [`ChatError::Busy`] instead of queued.

use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore, SemaphorePermit};
use tracing::debug;

use crate::clock::Clock;
use crate::error::ChatError;
use crate::models::Message;
use crate::session::Session;
use crate::synth::{self, ReplyGenerator, ResponseSynthesizer};

/// Where a conversation is in its exchange cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Ready for a submission.
    Idle,
    /// A reply is being generated.
    AwaitingReply,
}

/// A chat over one session.
#[derive(Debug)]
pub struct Conversation<G = ResponseSynthesizer> {
    session: Mutex<Session>,
    generator: Mutex<G>,
    gate: Semaphore,
}

impl<G: ReplyGenerator> Conversation<G> {
    /// Start a conversation with an empty session.
    pub fn new(generator: G) -> Self {
        Self::with_session(Session::new(), generator)
    }

    /// Start a conversation whose session uses `clock` for timestamps.
    pub fn with_clock(generator: G, clock: Arc<dyn Clock>) -> Self {
        Self::with_session(Session::with_clock(clock), generator)
    }

    fn with_session(session: Session, generator: G) -> Self {
        Self {
            session: Mutex::new(session),
            generator: Mutex::new(generator),
            gate: Semaphore::new(1),
        }
    }

    pub fn state(&self) -> ChatState {
        if self.gate.available_permits() == 0 {
            ChatState::AwaitingReply
        } else {
            ChatState::Idle
        }
    }

    fn enter(&self) -> Result<SemaphorePermit<'_>, ChatError> {
        self.gate.try_acquire().map_err(|_| ChatError::Busy)
    }

    /// Submit a user message and wait for the assistant's reply.
    ///
    /// Returns the appended assistant message. If generation fails the user
    /// message stays in the log, nothing else is appended, and the
    /// conversation is idle again.
    pub async fn submit(&self, text: &str) -> Result<Message, ChatError> {
        let _permit = self.enter()?;

        let history = {
            let mut session = self.session.lock().await;
            let history = session.messages().to_vec();
            session.append_user_message(text)?;
            history
        };
        debug!(history = history.len(), "awaiting reply");

        let reply = self
            .generator
            .lock()
            .await
            .generate_reply(text, &history)
            .await?;

        let message = self.session.lock().await.append_assistant_message(reply);
        Ok(message)
    }

    /// Append a summary of the conversation so far.
    pub async fn summarize(&self) -> Result<Message, ChatError> {
        let _permit = self.enter()?;

        let mut session = self.session.lock().await;
        let summary = synth::summarize(&session.transcript(), session.len())?;
        Ok(session.append_assistant_message(summary))
    }

    /// Current transcript text.
    pub async fn transcript(&self) -> String {
        self.session.lock().await.build_transcript()
    }

    /// Snapshot of the messages so far.
    pub async fn messages(&self) -> Vec<Message> {
        self.session.lock().await.messages().to_vec()
    }

    /// Most recent assistant message, if any.
    pub async fn last_reply(&self) -> Option<Message> {
        self.session
            .lock()
            .await
            .messages()
            .iter()
            .rev()
            .find(|m| !m.is_user())
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.session.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.session.lock().await.is_empty()
    }
}

//! Template-based response synthesis.
//!
//! Replies, summaries and search results are all canned text. Replies are
//! picked at random from a small template pool after a simulated thinking
//! delay; both the random source and the clock can be swapped for tests.

mod prompts;
mod reply;
mod results;
mod summary;

pub use prompts::{follow_up, related_questions, RELATED_COUNT};
pub use reply::{render_pool, CONTINUITY_PHRASE, POOL_SIZE};
pub use summary::summarize;

use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::SynthConfig;
use crate::error::ChatError;
use crate::models::{Message, SearchResult};
use crate::session::Transcript;

/// Produces the assistant's reply to a user message.
#[async_trait]
pub trait ReplyGenerator: Send {
    /// Generate a reply to `user_text`. `history` holds the messages that
    /// preceded it.
    async fn generate_reply(&mut self, user_text: &str, history: &[Message]) -> Result<String, ChatError>;
}

/// Canned-response synthesizer.
pub struct ResponseSynthesizer {
    rng: Box<dyn RngCore + Send>,
    clock: Arc<dyn Clock>,
    delay_ms: Range<u64>,
}

impl fmt::Debug for ResponseSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSynthesizer")
            .field("clock", &self.clock)
            .field("delay_ms", &self.delay_ms)
            .finish_non_exhaustive()
    }
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::new(&SynthConfig::default())
    }
}

impl ResponseSynthesizer {
    /// Create a synthesizer from settings. Seeds from the OS unless a seed is configured.
    pub fn new(config: &SynthConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        Self {
            rng: Box::new(rng),
            clock: Arc::new(SystemClock),
            delay_ms: config.reply_delay_ms(),
        }
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replace the time source used for search result timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Draw the thinking delay in whole milliseconds. An empty range yields its start.
    fn draw_delay(&mut self) -> Duration {
        let millis = if self.delay_ms.is_empty() {
            self.delay_ms.start
        } else {
            self.rng.random_range(self.delay_ms.clone())
        };
        Duration::from_millis(millis)
    }

    /// Summarize a conversation. See [`summarize`].
    pub fn summarize(&self, transcript: &Transcript<'_>, message_count: usize) -> Result<String, ChatError> {
        summary::summarize(transcript, message_count)
    }

    /// The fixed answer/source/summary result set for `query`.
    pub fn synthesize_search_results(&self, query: &str) -> Vec<SearchResult> {
        results::synthesize(query, self.clock.now())
    }
}

#[async_trait]
impl ReplyGenerator for ResponseSynthesizer {
    async fn generate_reply(&mut self, user_text: &str, history: &[Message]) -> Result<String, ChatError> {
        let delay = self.draw_delay();
        let choice = self.rng.random_range(0..POOL_SIZE);
        debug!(?delay, choice, "synthesizing reply");

        tokio::time::sleep(delay).await;

        let [overview, curiosity, follow_up] = render_pool(user_text, history.len());
        Ok(match choice {
            0 => overview,
            1 => curiosity,
            _ => follow_up,
        })
    }
}

//! Timing and randomness settings for the synthesizer.

use std::ops::Range;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default lower bound of the simulated thinking time.
pub const DEFAULT_MIN_DELAY_MS: u64 = 1000;
/// Default upper bound (exclusive) of the simulated thinking time.
pub const DEFAULT_MAX_DELAY_MS: u64 = 3000;
/// Default loading time before search results are shown.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 2000;

/// Synthesizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Lower bound of the reply delay, in milliseconds.
    pub min_delay_ms: u64,
    /// Upper bound of the reply delay (exclusive), in milliseconds.
    pub max_delay_ms: u64,
    /// Loading delay before search results, in milliseconds.
    pub search_delay_ms: u64,
    /// Seed for reproducible replies. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            seed: None,
        }
    }
}

impl SynthConfig {
    /// Same settings with every delay set to zero.
    #[must_use]
    pub fn without_delay(mut self) -> Self {
        self.min_delay_ms = 0;
        self.max_delay_ms = 0;
        self.search_delay_ms = 0;
        self
    }

    /// Range the reply delay is drawn from, in milliseconds. May be empty.
    pub const fn reply_delay_ms(&self) -> Range<u64> {
        self.min_delay_ms..self.max_delay_ms
    }

    pub const fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

//! Search result model for the results view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a search result entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Synthesized answer to the query.
    Answer,
    /// Pointer to supporting sources.
    Source,
    /// Short summary of the query.
    Summary,
}

impl ResultKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::Source => "source",
            Self::Summary => "summary",
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry of a search result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position-based identifier (1-based).
    pub id: u32,
    /// Heading shown for the entry.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Where the entry claims to come from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the entry was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// What kind of entry this is.
    #[serde(rename = "type")]
    pub kind: ResultKind,
}

//! Data models for conversations and search results.

mod message;
mod search;

pub use message::{Message, Sender};
pub use search::{ResultKind, SearchResult};

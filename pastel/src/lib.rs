//! Pastel - a conversation session core with canned, template-based replies.
//!
//! The crate keeps an append-only chat log per session, simulates an
//! assistant that "thinks" for a random delay before answering from a fixed
//! template pool, and produces templated summaries and mock search results.
//! No network calls are made; randomness and time are injectable.

pub mod clock;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;
pub mod session;
pub mod shell;
pub mod synth;

pub use conversation::{ChatState, Conversation};
pub use error::ChatError;
pub use session::Session;
pub use synth::{ReplyGenerator, ResponseSynthesizer};

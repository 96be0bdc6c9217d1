//! Conversation session state.

mod store;
mod transcript;

pub use store::Session;
pub use transcript::Transcript;

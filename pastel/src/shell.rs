//! Screen switching between landing search, results and chat.

use crate::error::ChatError;
use crate::synth::{self, RELATED_COUNT};

/// Suggestions offered on the landing screen.
pub const SUGGESTED_QUERIES: [&str; 4] = [
    "Explain quantum computing in simple terms",
    "Latest developments in AI technology",
    "Climate change impact on oceans",
    "Benefits of meditation for mental health",
];

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Landing search page.
    #[default]
    Search,
    /// Mock results for the current query.
    Results,
    /// Chat, optionally seeded with the current query.
    Chat,
}

/// Current screen and query.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    mode: ViewMode,
    query: String,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The query carried between screens. Empty when none was given.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Run a search and show its results. The query is trimmed; blank queries
    /// are refused and the screen does not change.
    pub fn search(&mut self, query: &str) -> Result<&str, ChatError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        self.query = query.to_string();
        self.mode = ViewMode::Results;
        Ok(&self.query)
    }

    /// Open the chat. A given query replaces the current one and becomes the
    /// chat's first message.
    pub fn start_chat(&mut self, query: Option<&str>) {
        if let Some(query) = query {
            self.query = query.to_string();
        }
        self.mode = ViewMode::Chat;
    }

    /// Questions offered alongside the current results.
    pub fn related_questions(&self) -> [String; RELATED_COUNT] {
        synth::related_questions(&self.query)
    }

    /// From the results screen, open a chat asking for more on the query.
    pub fn ask_follow_up(&mut self) -> Option<&str> {
        if self.mode != ViewMode::Results {
            return None;
        }
        let opener = synth::follow_up(&self.query);
        self.start_chat(Some(&opener));
        self.initial_message()
    }

    /// From the results screen, open a chat with related question `index` (0-based).
    pub fn ask_related(&mut self, index: usize) -> Option<&str> {
        if self.mode != ViewMode::Results {
            return None;
        }
        let question = self.related_questions().into_iter().nth(index)?;
        self.start_chat(Some(&question));
        self.initial_message()
    }

    /// Initial chat message, if the current query holds one.
    pub fn initial_message(&self) -> Option<&str> {
        (self.mode == ViewMode::Chat && !self.query.trim().is_empty()).then_some(self.query.as_str())
    }

    /// Return to the landing screen.
    pub fn back(&mut self) {
        self.mode = ViewMode::Search;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_then_chat_then_back() {
        let mut shell = Shell::new();
        assert_eq!(shell.mode(), ViewMode::Search);

        assert_eq!(shell.search("  Climate change impact on oceans "), Ok("Climate change impact on oceans"));
        assert_eq!(shell.mode(), ViewMode::Results);

        shell.start_chat(Some("Climate change impact on oceans"));
        assert_eq!(shell.mode(), ViewMode::Chat);
        assert_eq!(shell.initial_message(), Some("Climate change impact on oceans"));

        shell.back();
        assert_eq!(shell.mode(), ViewMode::Search);
        assert_eq!(shell.initial_message(), None);
    }

    #[test]
    fn test_blank_search_refused() {
        let mut shell = Shell::new();
        assert_eq!(shell.search("   "), Err(ChatError::EmptyInput));
        assert_eq!(shell.mode(), ViewMode::Search);
        assert_eq!(shell.query(), "");
    }

    #[test]
    fn test_chat_without_query_has_no_initial_message() {
        let mut shell = Shell::new();
        shell.start_chat(None);
        assert_eq!(shell.mode(), ViewMode::Chat);
        assert_eq!(shell.initial_message(), None);
    }

    #[test]
    fn test_follow_up_from_results() {
        let mut shell = Shell::new();
        assert_eq!(shell.ask_follow_up(), None);

        shell.search("Benefits of meditation").unwrap();
        assert_eq!(shell.ask_follow_up(), Some("Tell me more about: Benefits of meditation"));
        assert_eq!(shell.mode(), ViewMode::Chat);
    }

    #[test]
    fn test_related_question_starts_chat() {
        let mut shell = Shell::new();
        shell.search("Latest developments in AI technology").unwrap();
        assert_eq!(
            shell.related_questions()[1],
            "How does Latest developments work in practice?"
        );

        assert_eq!(shell.ask_related(3), None);
        assert_eq!(shell.mode(), ViewMode::Results);

        assert_eq!(
            shell.ask_related(2),
            Some("What are the latest developments in AI technology?")
        );
        assert_eq!(shell.mode(), ViewMode::Chat);
        assert_eq!(shell.ask_related(0), None);
    }

    #[test]
    fn test_back_from_results() {
        let mut shell = Shell::new();
        shell.search("q").unwrap();
        shell.back();
        assert_eq!(shell.mode(), ViewMode::Search);
        assert_eq!(shell.query(), "q");
    }
}

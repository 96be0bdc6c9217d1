//! Chat openers offered next to search results.
//!
//! Words are split on single spaces, like the summary's key topics.

use super::summary::leading_words;

/// Number of related questions offered per query.
pub const RELATED_COUNT: usize = 3;

/// Opener for continuing a search as a chat.
pub fn follow_up(query: &str) -> String {
    format!("Tell me more about: {query}")
}

/// Questions derived from the query's leading and trailing words.
pub fn related_questions(query: &str) -> [String; RELATED_COUNT] {
    [
        format!("What are the implications of {}?", leading_words(query, 3)),
        format!("How does {} work in practice?", leading_words(query, 2)),
        format!(
            "What are the latest developments in {}?",
            trailing_words(query, 2)
        ),
    ]
}

fn trailing_words(text: &str, count: usize) -> String {
    let words: Vec<_> = text.split(' ').collect();
    words[words.len().saturating_sub(count)..].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_up_quotes_query() {
        assert_eq!(
            follow_up("Climate change impact on oceans"),
            "Tell me more about: Climate change impact on oceans"
        );
    }

    #[test]
    fn related_from_long_query() {
        assert_eq!(
            related_questions("Climate change impact on oceans"),
            [
                "What are the implications of Climate change impact?",
                "How does Climate change work in practice?",
                "What are the latest developments in on oceans?",
            ]
        );
    }

    #[test]
    fn related_from_single_word() {
        assert_eq!(
            related_questions("AI"),
            [
                "What are the implications of AI?",
                "How does AI work in practice?",
                "What are the latest developments in AI?",
            ]
        );
    }

    #[test]
    fn related_from_empty_query() {
        assert_eq!(
            related_questions(""),
            [
                "What are the implications of ?",
                "How does  work in practice?",
                "What are the latest developments in ?",
            ]
        );
    }

    #[test]
    fn trailing_words_keeps_empty_runs() {
        assert_eq!(trailing_words("a b  c", 2), " c");
    }
}

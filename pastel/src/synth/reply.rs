//! Reply templates.
//!
//! Keyword checks are plain case-sensitive substring tests. Within a
//! template the first matching keyword wins.

/// Number of templates a reply is picked from.
pub const POOL_SIZE: usize = 3;

/// Phrase inserted into the follow-up template once the history is long enough.
pub const CONTINUITY_PHRASE: &str = "Building on our previous conversation, ";

/// History length above which the continuity phrase is used.
const CONTINUITY_MIN_HISTORY: usize = 2;

const OVERVIEW_OPENING: &str = "That's a fascinating question! Let me break this down for you. ";

const OVERVIEW_TOPICS: &[(&str, &str)] = &[
    (
        "quantum",
        "Quantum computing leverages the principles of quantum mechanics to process information \
         in ways that classical computers cannot. Think of it like having a coin that can be heads, \
         tails, or spinning in mid-air all at once - that's similar to how quantum bits (qubits) work.",
    ),
    (
        "AI",
        "Artificial Intelligence is rapidly evolving, with large language models like myself \
         becoming more sophisticated. Recent developments include multimodal AI that can understand \
         text, images, and audio, as well as improvements in reasoning capabilities.",
    ),
    (
        "climate",
        "Climate change is having profound effects on our oceans. Rising temperatures lead to \
         thermal expansion of seawater, contributing to sea level rise. Ocean acidification from \
         increased CO2 absorption is also affecting marine ecosystems.",
    ),
];

const OVERVIEW_FALLBACK: &str =
    "That's an interesting topic! Let me share some insights based on current understanding and research.";

const CURIOSITY_OPENING: &str = "I understand your curiosity about this topic. ";

const CURIOSITY_TOPICS: &[(&str, &str)] = &[
    (
        "meditation",
        "Meditation offers numerous mental health benefits including reduced stress, improved \
         focus, and better emotional regulation. Regular practice can actually change brain \
         structure, strengthening areas associated with learning and memory while reducing the \
         amygdala's stress response.",
    ),
    (
        "technology",
        "Technology continues to shape our world in unprecedented ways. From artificial \
         intelligence to renewable energy solutions, we're seeing innovations that could solve \
         some of humanity's greatest challenges.",
    ),
];

const CURIOSITY_FALLBACK: &str = "This is definitely worth exploring further. Based on current \
     research and understanding, there are several key aspects to consider.";

const FOLLOW_UP_SIMPLE: &str =
    "Let me explain this in straightforward terms without too much technical jargon.";
const FOLLOW_UP_FALLBACK: &str = "The complexity here is fascinating when you dive deeper into it.";

fn topic_body(user_text: &str, topics: &[(&str, &'static str)], fallback: &'static str) -> &'static str {
    topics
        .iter()
        .find(|(keyword, _)| user_text.contains(keyword))
        .map_or(fallback, |&(_, body)| body)
}

/// Render every template of the pool for `user_text`.
///
/// `history_len` is the number of messages that preceded `user_text`.
pub fn render_pool(user_text: &str, history_len: usize) -> [String; POOL_SIZE] {
    let overview = format!(
        "{OVERVIEW_OPENING}{}",
        topic_body(user_text, OVERVIEW_TOPICS, OVERVIEW_FALLBACK)
    );

    let curiosity = format!(
        "{CURIOSITY_OPENING}{}",
        topic_body(user_text, CURIOSITY_TOPICS, CURIOSITY_FALLBACK)
    );

    let continuity = if history_len > CONTINUITY_MIN_HISTORY {
        CONTINUITY_PHRASE
    } else {
        ""
    };
    let detail = if user_text.contains("simple") {
        FOLLOW_UP_SIMPLE
    } else {
        FOLLOW_UP_FALLBACK
    };
    let follow_up = format!(
        "Great question! {continuity}This touches on some really important concepts. {detail} \
         Would you like me to elaborate on any particular aspect?"
    );

    [overview, curiosity, follow_up]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantum_wins_over_ai() {
        let [overview, ..] = render_pool("quantum AI climate", 0);
        assert!(overview.starts_with(OVERVIEW_OPENING));
        assert!(overview.contains("quantum bits (qubits)"));
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        let [overview, ..] = render_pool("tell me about ai", 0);
        assert!(overview.ends_with(OVERVIEW_FALLBACK));

        let [overview, ..] = render_pool("Latest developments in AI technology", 0);
        assert!(overview.contains("multimodal AI"));
    }

    #[test]
    fn curiosity_topics() {
        let [_, curiosity, _] = render_pool("Benefits of meditation for mental health", 0);
        assert!(curiosity.contains("amygdala's stress response"));

        let [_, curiosity, _] = render_pool("Latest developments in AI technology", 0);
        assert!(curiosity.contains("renewable energy"));

        let [_, curiosity, _] = render_pool("cooking", 0);
        assert_eq!(curiosity, format!("{CURIOSITY_OPENING}{CURIOSITY_FALLBACK}"));
    }

    #[test]
    fn follow_up_continuity_needs_more_than_two_prior_messages() {
        let [.., short] = render_pool("hello", 2);
        assert!(!short.contains(CONTINUITY_PHRASE));

        let [.., long] = render_pool("hello", 3);
        assert!(long.starts_with("Great question! Building on our previous conversation, This"));
    }

    #[test]
    fn follow_up_simple() {
        let [.., reply] = render_pool("Explain quantum computing in simple terms", 0);
        assert_eq!(
            reply,
            "Great question! This touches on some really important concepts. Let me explain this \
             in straightforward terms without too much technical jargon. Would you like me to \
             elaborate on any particular aspect?"
        );
    }
}

//! Mock search result set.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{ResultKind, SearchResult};

/// Longest query prefix quoted in the summary entry, in characters.
const SUMMARY_QUERY_CHARS: usize = 50;

const RESEARCH_SOURCE: &str = "Academic Research Database";

const ANSWER_BODY: &str = "This topic involves several key concepts that are important to \
     understand. The current research suggests that there are multiple perspectives and approaches \
     to consider. Let me break this down into digestible information that addresses your specific \
     question.\n\n\
     Key points to consider:\n\
     \u{2022} Recent developments have shown significant progress in this area\n\
     \u{2022} Multiple studies support various approaches and methodologies\n\
     \u{2022} Practical applications are being explored across different industries\n\
     \u{2022} Future implications could be far-reaching and transformative\n\n\
     This information synthesizes current knowledge while acknowledging that this is an evolving \
     field with ongoing research and development.";

const SOURCES_BODY: &str = "Recent studies from leading institutions provide valuable insights \
     into this topic. Research papers and peer-reviewed articles offer in-depth analysis and \
     evidence-based conclusions.";

const SUMMARY_BODY: &str = "Key findings suggest this is a complex topic with multiple facets. \
     Current understanding is based on ongoing research and practical applications. Main \
     takeaways include the importance of continued study and practical implementation.";

/// Build the three result entries for `query`: answer, source, summary.
pub fn synthesize(query: &str, now: DateTime<Utc>) -> Vec<SearchResult> {
    vec![
        SearchResult {
            id: 1,
            title: "AI-Powered Answer".to_string(),
            content: format!("Based on your query \"{query}\", here's what I found: {ANSWER_BODY}"),
            source: None,
            timestamp: Some(now),
            kind: ResultKind::Answer,
        },
        SearchResult {
            id: 2,
            title: "Related Research Sources".to_string(),
            content: SOURCES_BODY.to_string(),
            source: Some(RESEARCH_SOURCE.to_string()),
            timestamp: Some(now - TimeDelta::hours(1)),
            kind: ResultKind::Source,
        },
        SearchResult {
            id: 3,
            title: "Quick Summary".to_string(),
            content: format!("Summary: {} - {SUMMARY_BODY}", truncate_query(query)),
            source: None,
            timestamp: Some(now - TimeDelta::hours(2)),
            kind: ResultKind::Summary,
        },
    ]
}

fn truncate_query(query: &str) -> String {
    match query.char_indices().nth(SUMMARY_QUERY_CHARS) {
        Some((cut, _)) => format!("{}...", &query[..cut]),
        None => query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn three_entries_in_fixed_order() {
        let results = synthesize("Climate change impact on oceans", now());
        let kinds: Vec<_> = results.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, [ResultKind::Answer, ResultKind::Source, ResultKind::Summary]);
        assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn answer_embeds_query_verbatim() {
        let query = "  weird \"quoted\" query  ";
        let results = synthesize(query, now());
        assert!(results[0].content.contains(query));
        assert!(results[0].content.contains("\u{2022} Multiple studies"));
    }

    #[test]
    fn timestamps_step_back_hourly() {
        let results = synthesize("q", now());
        assert_eq!(results[0].timestamp, Some(now()));
        assert_eq!(results[1].timestamp, Some(now() - TimeDelta::hours(1)));
        assert_eq!(results[2].timestamp, Some(now() - TimeDelta::hours(2)));
        assert_eq!(results[1].source.as_deref(), Some(RESEARCH_SOURCE));
        assert_eq!(results[0].source, None);
    }

    #[test]
    fn summary_truncates_long_query() {
        let long = "a".repeat(60);
        let results = synthesize(&long, now());
        let expected = format!("Summary: {}... - ", "a".repeat(50));
        assert!(results[2].content.starts_with(&expected));
    }

    #[test]
    fn summary_keeps_query_of_exactly_fifty_chars() {
        let exact = "é".repeat(50);
        assert_eq!(truncate_query(&exact), exact);
        assert_eq!(truncate_query(&"é".repeat(51)), format!("{}...", "é".repeat(50)));
    }
}

//! Search Suggestions
//!
//! Ranks the static suggestion catalog against what the user is typing and
//! serves recent searches from the search-history store.

mod ranker;
mod types;

pub use ranker::SuggestionRanker;
pub use types::*;

use crate::catalog::StaticCatalog;
use crate::history::SearchHistory;

/// Popular entries shown for a blank query
pub const FALLBACK_POPULAR_COUNT: usize = 5;

/// Category entries appended after the popular ones for a blank query
pub const FALLBACK_CATEGORY_COUNT: usize = 3;

/// Default number of suggestions to return
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Recent searches returned by [`recent_suggestions`]
pub const RECENT_SUGGESTION_LIMIT: usize = 5;

/// Rank the process-wide suggestion catalog against `query`.
pub fn rank_suggestions(query: &str, limit: usize) -> Vec<SuggestionEntry> {
    SuggestionRanker::new(StaticCatalog::global().suggestions()).rank(query, limit)
}

/// Recent searches, newest first. Falls back to the seeded list while the
/// history is empty.
pub fn recent_suggestions(history: &dyn SearchHistory) -> Vec<SuggestionEntry> {
    let recorded = history.recent(RECENT_SUGGESTION_LIMIT);
    if recorded.is_empty() {
        return StaticCatalog::global()
            .seeded_recent_searches()
            .iter()
            .take(RECENT_SUGGESTION_LIMIT)
            .cloned()
            .collect();
    }

    recorded
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            SuggestionEntry::new(format!("recent-{index}"), entry.query, SuggestionKind::Recent)
        })
        .collect()
}

/// Remember a submitted query. Blank queries are ignored and store failures
/// are logged rather than returned.
pub fn record_query(history: &dyn SearchHistory, query: &str) {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return;
    }

    if let Err(error) = history.record(trimmed) {
        tracing::warn!(
            event_name = "search.history.record_failed",
            error = %error,
            "failed to record search query"
        );
    }
}

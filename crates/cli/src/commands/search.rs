use chipscout_core::catalog::{Chip, StaticCatalog};
use chipscout_core::filter::FilterState;
use chipscout_core::suggestions::{rank_suggestions, record_query, SuggestionEntry};
use serde::Serialize;

use crate::commands::{load_config, open_history, CommandResult};

#[derive(Debug, Serialize)]
struct SearchOutput {
    query: String,
    suggestions: Vec<SuggestionEntry>,
    chips: Vec<Chip>,
}

/// Rank suggestions for `query`, list the chips it matches and remember the
/// query in the configured search history.
pub fn run(query: &str, limit: Option<usize>) -> CommandResult {
    let config = match load_config("search") {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let limit = limit.unwrap_or(config.search.default_limit).min(config.search.max_limit);
    let suggestions = rank_suggestions(query, limit);

    let filter = FilterState::default().set_query(query.trim());
    let chips: Vec<Chip> =
        StaticCatalog::global().search_chips(&filter).into_iter().cloned().collect();

    let history = open_history(&config);
    record_query(history.as_ref(), query);

    let message = format!("{} suggestions, {} matching chips", suggestions.len(), chips.len());
    CommandResult::success_with_data(
        "search",
        message,
        &SearchOutput { query: query.trim().to_string(), suggestions, chips },
    )
}

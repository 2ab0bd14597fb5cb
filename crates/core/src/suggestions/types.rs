//! Types for the suggestion ranker

use serde::{Deserialize, Serialize};

/// Where a suggestion came from, or how it matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Recent,
    Popular,
    /// Assigned to every entry returned for a non-empty query.
    TextualMatch,
    Category,
    Brand,
    Series,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Recent => "recent",
            SuggestionKind::Popular => "popular",
            SuggestionKind::TextualMatch => "textual_match",
            SuggestionKind::Category => "category",
            SuggestionKind::Brand => "brand",
            SuggestionKind::Series => "series",
        }
    }
}

/// A single entry in the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    /// Unique within a catalog
    pub id: String,
    /// Text shown to the user and matched against queries
    pub text: String,
    pub kind: SuggestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Usage count, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl SuggestionEntry {
    /// Bare entry with only an id, text and kind.
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            category: None,
            count: None,
            description: None,
            brand: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn relabeled(&self, kind: SuggestionKind) -> Self {
        Self { kind, ..self.clone() }
    }
}

/// Precedence bucket a query match falls into. Earlier variants rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Display text starts with the query
    Prefix = 0,
    /// Display text contains the query elsewhere
    Substring = 1,
    /// Only the description contains the query
    Description = 2,
    /// Only the brand contains the query
    Brand = 3,
}

impl MatchTier {
    pub const COUNT: usize = 4;

    /// Earliest tier the entry qualifies for. `normalized_query` must already be lowercase.
    pub fn classify(entry: &SuggestionEntry, normalized_query: &str) -> Option<Self> {
        let text = entry.text.to_lowercase();
        if text.starts_with(normalized_query) {
            return Some(MatchTier::Prefix);
        }
        if text.contains(normalized_query) {
            return Some(MatchTier::Substring);
        }

        let in_description = entry
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(normalized_query));
        if in_description {
            return Some(MatchTier::Description);
        }

        let in_brand = entry
            .brand
            .as_deref()
            .is_some_and(|brand| brand.to_lowercase().contains(normalized_query));
        in_brand.then_some(MatchTier::Brand)
    }
}

/// Persisted search made by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub query: String,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

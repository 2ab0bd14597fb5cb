//! Tiered suggestion ranking

use std::collections::HashSet;

use super::types::{MatchTier, SuggestionEntry, SuggestionKind};
use super::{FALLBACK_CATEGORY_COUNT, FALLBACK_POPULAR_COUNT};

/// Ranks entries of a fixed catalog against free-text queries.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker<'a> {
    entries: &'a [SuggestionEntry],
}

impl<'a> SuggestionRanker<'a> {
    pub fn new(entries: &'a [SuggestionEntry]) -> Self {
        Self { entries }
    }

    /// Ordered, de-duplicated suggestions for `query`, at most `limit` long.
    ///
    /// A blank query returns the popular/category fallback with the original
    /// kinds. Otherwise every entry lands in its earliest [`MatchTier`], tiers
    /// are concatenated in precedence order and each result is relabeled as
    /// [`SuggestionKind::TextualMatch`].
    pub fn rank(&self, query: &str, limit: usize) -> Vec<SuggestionEntry> {
        if limit == 0 {
            return Vec::new();
        }

        if query.trim().is_empty() {
            return self.fallback(limit);
        }
        let normalized = query.to_lowercase();

        let mut tiers: [Vec<&SuggestionEntry>; MatchTier::COUNT] = Default::default();
        for entry in self.entries {
            if let Some(tier) = MatchTier::classify(entry, &normalized) {
                tiers[tier as usize].push(entry);
            }
        }

        let mut seen = HashSet::new();
        tiers
            .into_iter()
            .flatten()
            .filter(|entry| seen.insert(entry.id.as_str()))
            .take(limit)
            .map(|entry| entry.relabeled(SuggestionKind::TextualMatch))
            .collect()
    }

    fn fallback(&self, limit: usize) -> Vec<SuggestionEntry> {
        let popular = self
            .entries
            .iter()
            .filter(|entry| entry.kind == SuggestionKind::Popular)
            .take(FALLBACK_POPULAR_COUNT);
        let categories = self
            .entries
            .iter()
            .filter(|entry| entry.kind == SuggestionKind::Category)
            .take(FALLBACK_CATEGORY_COUNT);

        let mut seen = HashSet::new();
        popular
            .chain(categories)
            .filter(|entry| seen.insert(entry.id.as_str()))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::SuggestionRanker;
    use crate::catalog::StaticCatalog;
    use crate::suggestions::{MatchTier, SuggestionEntry, SuggestionKind};

    fn ranked_ids(ranker: &SuggestionRanker<'_>, query: &str, limit: usize) -> Vec<String> {
        ranker.rank(query, limit).into_iter().map(|entry| entry.id).collect()
    }

    fn fixture() -> Vec<SuggestionEntry> {
        vec![
            SuggestionEntry::new("brand-only", "Regulator Co", SuggestionKind::Brand)
                .with_brand("Voltage Works"),
            SuggestionEntry::new("described", "LM2596", SuggestionKind::Popular)
                .with_description("3A step-down voltage regulator"),
            SuggestionEntry::new("inner", "Dual Voltage Ref", SuggestionKind::Series),
            SuggestionEntry::new("prefix", "Voltage Monitor", SuggestionKind::Category)
                .with_description("voltage supervisors"),
            SuggestionEntry::new("prefix", "Voltage Monitor (dup)", SuggestionKind::Popular),
            SuggestionEntry::new("unrelated", "NE555", SuggestionKind::Popular),
        ]
    }

    #[test]
    fn stm32_query_ranks_part_matches_before_brand_entries() {
        let catalog = StaticCatalog::global();
        let ranker = SuggestionRanker::new(catalog.suggestions());

        let ids = ranked_ids(&ranker, "STM32", 10);
        let f407 = ids.iter().position(|id| id == "popular-stm32f407").expect("STM32F407");
        let f103 = ids.iter().position(|id| id == "popular-stm32f103").expect("STM32F103");
        let brand = ids.iter().position(|id| id == "brand-st").expect("brand entry");

        assert!(f407 < brand && f103 < brand);
        assert_eq!(&ids[..3], ["popular-stm32f407", "popular-stm32f103", "series-stm32"]);
        assert!(!ids.iter().any(|id| id == "popular-lis3dh"));
    }

    #[test]
    fn tiers_follow_precedence_and_relabel_kind() {
        let entries = fixture();
        let ranker = SuggestionRanker::new(&entries);

        let results = ranker.rank("VOLTAGE", 10);
        let ids: Vec<&str> = results.iter().map(|entry| entry.id.as_str()).collect();

        assert_eq!(ids, vec!["prefix", "inner", "described", "brand-only"]);
        assert!(results.iter().all(|entry| entry.kind == SuggestionKind::TextualMatch));
        assert_eq!(results[0].text, "Voltage Monitor", "first occurrence wins");
    }

    #[test]
    fn entry_matching_text_and_description_appears_once() {
        let entries = fixture();
        let ranker = SuggestionRanker::new(&entries);

        let results = ranker.rank("voltage", 10);
        let prefix_hits = results.iter().filter(|entry| entry.id == "prefix").count();
        assert_eq!(prefix_hits, 1);
        assert_eq!(MatchTier::classify(&entries[3], "voltage"), Some(MatchTier::Prefix));
    }

    #[test]
    fn results_are_truncated_and_unique() {
        let catalog = StaticCatalog::global();
        let ranker = SuggestionRanker::new(catalog.suggestions());

        for query in ["s", "m", "32", "regulator", "texas", "", "  ", "zzz"] {
            for limit in [1, 2, 5, 50] {
                let results = ranker.rank(query, limit);
                assert!(results.len() <= limit, "query {query:?} limit {limit}");
                let unique: HashSet<&str> = results.iter().map(|entry| entry.id.as_str()).collect();
                assert_eq!(unique.len(), results.len(), "duplicates for {query:?}");
            }
        }
    }

    #[test]
    fn every_match_contains_query_in_some_field() {
        let catalog = StaticCatalog::global();
        let ranker = SuggestionRanker::new(catalog.suggestions());

        for query in ["stm", "Regulator", "ti", "esp32", "sensor"] {
            let needle = query.to_lowercase();
            for entry in ranker.rank(query, 50) {
                let hit = [Some(entry.text.as_str()), entry.description.as_deref(), entry.brand.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&needle));
                assert!(hit, "{} does not contain {query}", entry.id);
            }
        }
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_match() {
        let catalog = StaticCatalog::global();
        let ranker = SuggestionRanker::new(catalog.suggestions());

        for entry in ranker.rank("esp32 ", 10) {
            let hit = [Some(entry.text.as_str()), entry.description.as_deref(), entry.brand.as_deref()]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains("esp32 "));
            assert!(hit, "{} does not contain \"esp32 \"", entry.id);
        }
        assert!(!ranked_ids(&ranker, "esp32 ", 10).iter().any(|id| id == "popular-esp32"));
        assert!(ranked_ids(&ranker, "esp32", 10).iter().any(|id| id == "popular-esp32"));
    }

    #[test]
    fn blank_query_returns_popular_then_category_fallback() {
        let catalog = StaticCatalog::global();
        let ranker = SuggestionRanker::new(catalog.suggestions());

        let results = ranker.rank("   ", 20);
        let kinds: Vec<SuggestionKind> = results.iter().map(|entry| entry.kind).collect();

        assert_eq!(results.len(), 8);
        assert!(kinds[..5].iter().all(|kind| *kind == SuggestionKind::Popular));
        assert!(kinds[5..].iter().all(|kind| *kind == SuggestionKind::Category));
        assert_eq!(results[0].id, "popular-stm32f407");
        assert_eq!(results[5].id, "category-microcontrollers");

        assert_eq!(ranker.rank("", 3), results[..3].to_vec());
        assert_eq!(ranker.rank("", 20), results, "fallback is deterministic");
    }

    #[test]
    fn zero_limit_and_no_match_return_empty() {
        let catalog = StaticCatalog::global();
        let ranker = SuggestionRanker::new(catalog.suggestions());

        assert!(ranker.rank("stm32", 0).is_empty());
        assert!(ranker.rank("vacuum tube", 10).is_empty());
    }
}

//! Static component catalog
//!
//! Chips, categories, order details and search suggestions are built once per
//! process from seed tables and shared read-only by every caller.

mod seeds;
mod types;

use std::sync::OnceLock;

use thiserror::Error;

use crate::filter::FilterState;
use crate::suggestions::SuggestionEntry;

pub use types::{
    Category, CategoryFacets, Chip, DistributorOffer, KeyParameter, Lifecycle, OrderDetails,
    ParameterFacet, PriceBreak,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("chip `{0}` was not found")]
    ChipNotFound(String),
    #[error("category `{0}` was not found")]
    CategoryNotFound(String),
    #[error("no order details are available for chip `{0}`")]
    OrderDetailsNotFound(String),
}

static GLOBAL_CATALOG: OnceLock<StaticCatalog> = OnceLock::new();

#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    chips: Vec<Chip>,
    categories: Vec<Category>,
    order_details: Vec<OrderDetails>,
    suggestions: Vec<SuggestionEntry>,
    recent_searches: Vec<SuggestionEntry>,
}

impl StaticCatalog {
    pub fn new(
        chips: Vec<Chip>,
        categories: Vec<Category>,
        order_details: Vec<OrderDetails>,
        suggestions: Vec<SuggestionEntry>,
        recent_searches: Vec<SuggestionEntry>,
    ) -> Self {
        Self { chips, categories, order_details, suggestions, recent_searches }
    }

    /// Process-wide catalog, built from the seed tables on first access.
    pub fn global() -> &'static StaticCatalog {
        GLOBAL_CATALOG.get_or_init(|| {
            let catalog = Self::from_seeds();
            tracing::debug!(
                event_name = "catalog.loaded",
                chips = catalog.chips.len(),
                categories = catalog.categories.len(),
                suggestions = catalog.suggestions.len(),
                "static catalog initialized"
            );
            catalog
        })
    }

    pub fn from_seeds() -> Self {
        Self::new(
            seeds::build_chips(),
            seeds::build_categories(),
            seeds::build_order_details(),
            seeds::build_suggestions(),
            seeds::build_recent_searches(),
        )
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn suggestions(&self) -> &[SuggestionEntry] {
        &self.suggestions
    }

    /// Recent searches shown before a session has recorded any of its own.
    pub fn seeded_recent_searches(&self) -> &[SuggestionEntry] {
        &self.recent_searches
    }

    pub fn chip(&self, chip_id: &str) -> Result<&Chip, CatalogError> {
        self.chips
            .iter()
            .find(|chip| chip.id.eq_ignore_ascii_case(chip_id))
            .or_else(|| {
                self.chips.iter().find(|chip| chip.part_number.eq_ignore_ascii_case(chip_id))
            })
            .ok_or_else(|| CatalogError::ChipNotFound(chip_id.to_owned()))
    }

    pub fn category(&self, category_id: &str) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|category| category.id.eq_ignore_ascii_case(category_id))
            .ok_or_else(|| CatalogError::CategoryNotFound(category_id.to_owned()))
    }

    pub fn root_categories(&self) -> Vec<&Category> {
        self.categories.iter().filter(|category| category.parent_id.is_none()).collect()
    }

    pub fn subcategories(&self, parent_id: &str) -> Result<Vec<&Category>, CatalogError> {
        let parent = self.category(parent_id)?;
        Ok(self
            .categories
            .iter()
            .filter(|category| category.parent_id.as_deref() == Some(parent.id.as_str()))
            .collect())
    }

    /// Chips filed directly under the category or under one of its subcategories.
    pub fn chips_in_category(&self, category_id: &str) -> Result<Vec<&Chip>, CatalogError> {
        let category = self.category(category_id)?;
        let child_ids: Vec<&str> = self
            .categories
            .iter()
            .filter(|candidate| candidate.parent_id.as_deref() == Some(category.id.as_str()))
            .map(|candidate| candidate.id.as_str())
            .collect();

        Ok(self
            .chips
            .iter()
            .filter(|chip| {
                chip.category_id == category.id || child_ids.contains(&chip.category_id.as_str())
            })
            .collect())
    }

    pub fn order_details(&self, chip_id: &str) -> Result<&OrderDetails, CatalogError> {
        let chip = self.chip(chip_id)?;
        self.order_details
            .iter()
            .find(|details| details.chip_id == chip.id)
            .ok_or_else(|| CatalogError::OrderDetailsNotFound(chip.id.clone()))
    }

    /// Alternative parts in the order the chip lists them; unknown ids are skipped.
    pub fn alternatives(&self, chip_id: &str) -> Result<Vec<&Chip>, CatalogError> {
        let chip = self.chip(chip_id)?;
        Ok(chip
            .alternative_ids
            .iter()
            .filter_map(|alternative_id| self.chip(alternative_id).ok())
            .filter(|alternative| alternative.id != chip.id)
            .collect())
    }

    /// Chips matching the filter's free-text query and every selected facet.
    pub fn search_chips(&self, filter: &FilterState) -> Vec<&Chip> {
        let query = filter.search_query().trim().to_lowercase();

        self.chips
            .iter()
            .filter(|chip| query.is_empty() || chip.matches_text(&query))
            .filter(|chip| {
                filter.selected_brands().is_empty()
                    || filter
                        .selected_brands()
                        .iter()
                        .any(|brand| brand.eq_ignore_ascii_case(&chip.manufacturer))
            })
            .filter(|chip| {
                filter.selected_packages().is_empty()
                    || filter
                        .selected_packages()
                        .iter()
                        .any(|package| package.eq_ignore_ascii_case(&chip.package))
            })
            .filter(|chip| {
                filter.selected_parameters().iter().all(|(name, values)| {
                    chip.parameter(name).is_some_and(|actual| {
                        values.iter().any(|value| value.eq_ignore_ascii_case(actual))
                    })
                })
            })
            .collect()
    }
}

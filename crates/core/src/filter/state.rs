use std::collections::BTreeMap;

use serde::Serialize;

/// Result count with no facets selected.
pub const MAX_RESULT_COUNT: u32 = 10_000;

/// Floor of the simulated result count.
pub const MIN_RESULT_COUNT: u32 = 100;

pub const BRAND_WEIGHT: u32 = 300;
pub const PACKAGE_WEIGHT: u32 = 200;
pub const PARAMETER_WEIGHT: u32 = 150;

/// Facet selection and free-text query for one browsing session.
///
/// Every operation returns a fresh state; a value held by a caller is never
/// changed underneath it. `result_count` is derived from the selection and is
/// recomputed by every operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterState {
    selected_brands: Vec<String>,
    selected_packages: Vec<String>,
    selected_parameters: BTreeMap<String, Vec<String>>,
    search_query: String,
    result_count: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_brands: Vec::new(),
            selected_packages: Vec::new(),
            selected_parameters: BTreeMap::new(),
            search_query: String::new(),
            result_count: MAX_RESULT_COUNT,
        }
    }
}

fn toggle_member(values: &mut Vec<String>, value: &str, included: bool) {
    let present = values.iter().any(|existing| existing == value);
    match (included, present) {
        (true, false) => values.push(value.to_owned()),
        (false, true) => values.retain(|existing| existing != value),
        _ => {}
    }
}

/// Simulated size of the filtered result pool.
pub fn estimate_result_count(brands: usize, packages: usize, parameter_values: usize) -> u32 {
    let deduction = u64::from(BRAND_WEIGHT)
        .saturating_mul(brands as u64)
        .saturating_add(u64::from(PACKAGE_WEIGHT).saturating_mul(packages as u64))
        .saturating_add(u64::from(PARAMETER_WEIGHT).saturating_mul(parameter_values as u64));

    let remaining = u64::from(MAX_RESULT_COUNT).saturating_sub(deduction);
    remaining.max(u64::from(MIN_RESULT_COUNT)) as u32
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brands in selection order.
    pub fn selected_brands(&self) -> &[String] {
        &self.selected_brands
    }

    /// Packages in selection order.
    pub fn selected_packages(&self) -> &[String] {
        &self.selected_packages
    }

    pub fn selected_parameters(&self) -> &BTreeMap<String, Vec<String>> {
        &self.selected_parameters
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn result_count(&self) -> u32 {
        self.result_count
    }

    #[must_use]
    pub fn toggle_brand(&self, brand: &str, included: bool) -> Self {
        let mut next = self.clone();
        toggle_member(&mut next.selected_brands, brand, included);
        next.recompute()
    }

    #[must_use]
    pub fn toggle_package(&self, package: &str, included: bool) -> Self {
        let mut next = self.clone();
        toggle_member(&mut next.selected_packages, package, included);
        next.recompute()
    }

    /// Add or remove `value` under `category`; a category left without values is dropped.
    #[must_use]
    pub fn toggle_parameter(&self, category: &str, value: &str, included: bool) -> Self {
        let mut next = self.clone();
        let values = next.selected_parameters.entry(category.to_owned()).or_default();
        toggle_member(values, value, included);
        if values.is_empty() {
            next.selected_parameters.remove(category);
        }
        next.recompute()
    }

    /// Replace the free-text query. The query does not influence `result_count`.
    #[must_use]
    pub fn set_query(&self, text: &str) -> Self {
        Self { search_query: text.to_owned(), ..self.clone() }
    }

    #[must_use]
    pub fn reset(&self) -> Self {
        Self::default()
    }

    pub fn parameter_value_count(&self) -> usize {
        self.selected_parameters.values().map(Vec::len).sum()
    }

    pub fn count_selected_facets(&self) -> usize {
        self.selected_brands.len() + self.selected_packages.len() + self.parameter_value_count()
    }

    pub fn is_empty(&self) -> bool {
        self.count_selected_facets() == 0 && self.search_query.is_empty()
    }

    /// Human-readable chips for the active filter bar, omitting empty facets.
    pub fn summarize(&self) -> Vec<String> {
        let mut summary = Vec::new();

        let brands = self.selected_brands.len();
        if brands > 0 {
            summary.push(plural(brands, "brand", "brands"));
        }
        let packages = self.selected_packages.len();
        if packages > 0 {
            summary.push(plural(packages, "package", "packages"));
        }
        let parameters = self.parameter_value_count();
        if parameters > 0 {
            summary.push(plural(parameters, "parameter value", "parameter values"));
        }
        if !self.search_query.is_empty() {
            summary.push(format!("query: {}", self.search_query));
        }

        summary
    }

    fn recompute(mut self) -> Self {
        self.result_count = estimate_result_count(
            self.selected_brands.len(),
            self.selected_packages.len(),
            self.parameter_value_count(),
        );
        self
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::{estimate_result_count, FilterState, MAX_RESULT_COUNT, MIN_RESULT_COUNT};

    #[test]
    fn brand_then_package_yields_9500() {
        let state = FilterState::default()
            .toggle_brand("Texas Instruments", true)
            .toggle_package("SOT-23-6", true);

        assert_eq!(state.result_count(), 10_000 - 300 - 200);
        assert_eq!(state.result_count(), 9_500);
    }

    #[test]
    fn two_values_in_one_parameter_yield_9700() {
        let state = FilterState::default()
            .toggle_parameter("voltage", "3.3V", true)
            .toggle_parameter("voltage", "5V", true);

        assert_eq!(state.result_count(), 9_700);
        assert_eq!(state.selected_parameters()["voltage"], vec!["3.3V", "5V"]);
    }

    #[test]
    fn result_count_floors_at_minimum() {
        let mut state = FilterState::default();
        for index in 0..50 {
            state = state.toggle_brand(&format!("brand-{index}"), true);
            assert!(state.result_count() >= MIN_RESULT_COUNT);
            assert!(state.result_count() <= MAX_RESULT_COUNT);
        }
        assert_eq!(state.result_count(), MIN_RESULT_COUNT);
        assert_eq!(estimate_result_count(usize::MAX, 0, 0), MIN_RESULT_COUNT);
    }

    #[test]
    fn toggle_on_then_off_restores_previous_state() {
        let base = FilterState::default()
            .toggle_brand("Espressif", true)
            .toggle_parameter("core", "Cortex-M4", true);

        let restored = base.toggle_package("QFN-56", true).toggle_package("QFN-56", false);
        assert_eq!(restored, base);

        let restored = base.toggle_parameter("flash", "1MB", true).toggle_parameter("flash", "1MB", false);
        assert_eq!(restored, base);
        assert!(!restored.selected_parameters().contains_key("flash"));
    }

    #[test]
    fn toggling_is_idempotent() {
        let once = FilterState::default().toggle_brand("WCH", true);
        let twice = once.toggle_brand("WCH", true);
        assert_eq!(once, twice);

        let removed = FilterState::default().toggle_brand("WCH", false);
        assert_eq!(removed, FilterState::default());
    }

    #[test]
    fn removing_last_value_drops_parameter_key() {
        let state = FilterState::default()
            .toggle_parameter("current", "1A", true)
            .toggle_parameter("current", "1A", false);

        assert!(state.selected_parameters().is_empty());
        assert_eq!(state.result_count(), MAX_RESULT_COUNT);
    }

    #[test]
    fn operations_do_not_mutate_the_original() {
        let original = FilterState::default().toggle_brand("Bosch Sensortec", true);
        let snapshot = original.clone();

        let _ = original.toggle_brand("Bosch Sensortec", false);
        let _ = original.set_query("bme");
        let _ = original.reset();

        assert_eq!(original, snapshot);
    }

    #[test]
    fn query_does_not_affect_result_count() {
        let state = FilterState::default().toggle_brand("WCH", true);
        let with_query = state.set_query("usb uart bridge");

        assert_eq!(with_query.result_count(), state.result_count());
        assert_eq!(with_query.search_query(), "usb uart bridge");
        assert_eq!(with_query.count_selected_facets(), 1);
    }

    #[test]
    fn unknown_facets_are_accepted_as_is() {
        let state = FilterState::default()
            .toggle_brand("Not A Real Vendor", true)
            .toggle_parameter("", "", true);

        assert_eq!(state.selected_brands(), ["Not A Real Vendor"]);
        assert_eq!(state.count_selected_facets(), 2);
    }

    #[test]
    fn summary_lists_non_empty_facets_in_order() {
        assert!(FilterState::default().summarize().is_empty());

        let state = FilterState::default()
            .toggle_brand("Texas Instruments", true)
            .toggle_brand("Microchip Technology", true)
            .toggle_parameter("voltage", "3.3V", true)
            .set_query("op-amp");

        assert_eq!(
            state.summarize(),
            vec!["2 brands".to_string(), "1 parameter value".to_string(), "query: op-amp".to_string()]
        );
        assert_eq!(state.count_selected_facets(), 3);
    }

    #[test]
    fn reset_returns_initial_state() {
        let state = FilterState::default()
            .toggle_package("SOIC-8", true)
            .set_query("timer")
            .reset();

        assert_eq!(state, FilterState::new());
        assert!(state.is_empty());
        assert_eq!(state.result_count(), MAX_RESULT_COUNT);
    }
}

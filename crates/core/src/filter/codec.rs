//! Text encodings of [`FilterState`]: a JSON form for persistence and the
//! request query string used by the search page.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::FilterState;

/// Persisted facet fields. `result_count` is never stored.
#[derive(Debug, Serialize)]
struct WireFilter {
    brands: Vec<String>,
    packages: Vec<String>,
    parameters: BTreeMap<String, Vec<String>>,
    q: String,
}

fn string_items(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

impl FilterState {
    /// JSON object with `brands`, `packages`, `parameters` and `q`.
    pub fn serialize(&self) -> String {
        let wire = WireFilter {
            brands: self.selected_brands().to_vec(),
            packages: self.selected_packages().to_vec(),
            parameters: self.selected_parameters().clone(),
            q: self.search_query().to_owned(),
        };
        serde_json::to_string(&wire).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Inverse of [`FilterState::serialize`]. Never fails: text that is not a
    /// JSON object gives the default state, and fields of the wrong shape are
    /// skipped while the usable ones are kept.
    pub fn deserialize(text: &str) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(text) else {
            tracing::debug!(event_name = "filter.deserialize.malformed", "ignoring malformed filter");
            return Self::default();
        };

        let mut state = Self::default();
        for brand in string_items(fields.get("brands")) {
            state = state.toggle_brand(brand, true);
        }
        for package in string_items(fields.get("packages")) {
            state = state.toggle_package(package, true);
        }
        if let Some(parameters) = fields.get("parameters").and_then(Value::as_object) {
            for (category, values) in parameters {
                for value in string_items(Some(values)) {
                    state = state.toggle_parameter(category, value, true);
                }
            }
        }
        if let Some(query) = fields.get("q").and_then(Value::as_str) {
            state = state.set_query(query);
        }

        state
    }

    /// `category=<name>&brands=<csv>&packages=<csv>&parameters=<json>&q=<text>`
    /// with every empty part left out and values percent-encoded.
    pub fn to_query_string(&self, category: Option<&str>) -> String {
        let mut parts = Vec::new();

        if let Some(category) = category.filter(|category| !category.is_empty()) {
            parts.push(format!("category={}", urlencoding::encode(category)));
        }
        if !self.selected_brands().is_empty() {
            parts.push(format!("brands={}", encode_csv(self.selected_brands())));
        }
        if !self.selected_packages().is_empty() {
            parts.push(format!("packages={}", encode_csv(self.selected_packages())));
        }
        if !self.selected_parameters().is_empty() {
            let json = serde_json::to_string(self.selected_parameters())
                .unwrap_or_else(|_| "{}".to_owned());
            parts.push(format!("parameters={}", urlencoding::encode(&json)));
        }
        if !self.search_query().is_empty() {
            parts.push(format!("q={}", urlencoding::encode(self.search_query())));
        }

        parts.join("&")
    }
}

fn encode_csv(values: &[String]) -> String {
    values.iter().map(|value| urlencoding::encode(value).into_owned()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use crate::filter::FilterState;

    fn populated() -> FilterState {
        FilterState::default()
            .toggle_brand("Texas Instruments", true)
            .toggle_brand("WCH", true)
            .toggle_package("SOT-23-6", true)
            .toggle_parameter("voltage", "3.3V", true)
            .toggle_parameter("voltage", "5V", true)
            .toggle_parameter("core", "Cortex-M4", true)
            .set_query("low noise, \"quoted\" & more")
    }

    #[test]
    fn serialize_round_trips_facet_fields() {
        let state = populated();
        let decoded = FilterState::deserialize(&state.serialize());

        assert_eq!(decoded.selected_brands(), state.selected_brands());
        assert_eq!(decoded.selected_packages(), state.selected_packages());
        assert_eq!(decoded.selected_parameters(), state.selected_parameters());
        assert_eq!(decoded.search_query(), state.search_query());
        assert_eq!(decoded.result_count(), state.result_count());

        let empty = FilterState::default();
        assert_eq!(FilterState::deserialize(&empty.serialize()), empty);
    }

    #[test]
    fn blank_values_survive_round_trip() {
        let state = FilterState::default().toggle_brand("", true).toggle_parameter("v", " ", true);
        let decoded = FilterState::deserialize(&state.serialize());

        assert_eq!(decoded, state);
        assert_eq!(decoded.selected_brands(), [""]);
        assert_eq!(decoded.selected_parameters()["v"], vec![" "]);
        assert_eq!(decoded.result_count(), 10_000 - 300 - 150);
    }

    #[test]
    fn serialized_form_omits_result_count() {
        let encoded = populated().serialize();
        assert!(!encoded.contains("result_count"));
        assert!(encoded.contains("\"brands\""));
    }

    #[test]
    fn malformed_input_yields_default_state() {
        for text in ["not valid", "", "[1,2,3]", "\"brands\"", "{", "null"] {
            assert_eq!(FilterState::deserialize(text), FilterState::default(), "input {text:?}");
        }
    }

    #[test]
    fn wrong_shaped_fields_are_skipped() {
        let decoded = FilterState::deserialize(
            r#"{"brands":["Espressif",7,null],"packages":"QFN-56","parameters":{"core":["AVR"],"flash":"1MB","voltage":[]},"q":42}"#,
        );

        assert_eq!(decoded.selected_brands(), ["Espressif"]);
        assert!(decoded.selected_packages().is_empty());
        assert_eq!(decoded.selected_parameters().len(), 1);
        assert_eq!(decoded.selected_parameters()["core"], vec!["AVR"]);
        assert_eq!(decoded.search_query(), "");
        assert_eq!(decoded.result_count(), 10_000 - 300 - 150);
    }

    #[test]
    fn query_string_encodes_each_non_empty_facet() {
        let state = FilterState::default()
            .toggle_brand("Texas Instruments", true)
            .toggle_brand("WCH", true)
            .toggle_parameter("voltage", "3.3V", true)
            .set_query("buck 3A");

        assert_eq!(
            state.to_query_string(Some("power-management")),
            "category=power-management&brands=Texas%20Instruments,WCH\
             &parameters=%7B%22voltage%22%3A%5B%223.3V%22%5D%7D&q=buck%203A"
        );
    }

    #[test]
    fn query_string_for_empty_state_contains_only_category() {
        let state = FilterState::default();
        assert_eq!(state.to_query_string(Some("sensors")), "category=sensors");
        assert_eq!(state.to_query_string(None), "");
    }
}

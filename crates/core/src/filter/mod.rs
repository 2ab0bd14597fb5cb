//! Faceted filter state for category browsing and search results.

mod codec;
mod state;

use serde::{Deserialize, Serialize};

pub use state::{
    estimate_result_count, FilterState, BRAND_WEIGHT, MAX_RESULT_COUNT, MIN_RESULT_COUNT,
    PACKAGE_WEIGHT, PARAMETER_WEIGHT,
};

fn included_by_default() -> bool {
    true
}

/// One user interaction with the filter controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterOp {
    ToggleBrand {
        brand: String,
        #[serde(default = "included_by_default")]
        included: bool,
    },
    TogglePackage {
        package: String,
        #[serde(default = "included_by_default")]
        included: bool,
    },
    ToggleParameter {
        category: String,
        value: String,
        #[serde(default = "included_by_default")]
        included: bool,
    },
    SetQuery {
        text: String,
    },
    Reset,
}

impl FilterState {
    #[must_use]
    pub fn apply(&self, op: &FilterOp) -> Self {
        match op {
            FilterOp::ToggleBrand { brand, included } => self.toggle_brand(brand, *included),
            FilterOp::TogglePackage { package, included } => {
                self.toggle_package(package, *included)
            }
            FilterOp::ToggleParameter { category, value, included } => {
                self.toggle_parameter(category, value, *included)
            }
            FilterOp::SetQuery { text } => self.set_query(text),
            FilterOp::Reset => self.reset(),
        }
    }

    #[must_use]
    pub fn apply_all<'a>(&self, ops: impl IntoIterator<Item = &'a FilterOp>) -> Self {
        ops.into_iter().fold(self.clone(), |state, op| state.apply(op))
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterOp, FilterState};

    #[test]
    fn ops_decode_from_tagged_json() {
        let ops: Vec<FilterOp> = serde_json::from_str(
            r#"[
                {"op":"toggle_brand","brand":"Texas Instruments"},
                {"op":"toggle_package","package":"SOT-23-6","included":true},
                {"op":"toggle_parameter","category":"voltage","value":"5V"},
                {"op":"set_query","text":"buck"}
            ]"#,
        )
        .expect("ops should decode");

        let state = FilterState::default().apply_all(&ops);
        assert_eq!(state.result_count(), 10_000 - 300 - 200 - 150);
        assert_eq!(state.search_query(), "buck");
    }

    #[test]
    fn reset_op_clears_everything() {
        let state = FilterState::default().apply_all(&[
            FilterOp::ToggleBrand { brand: "WCH".to_string(), included: true },
            FilterOp::Reset,
        ]);
        assert_eq!(state, FilterState::default());
    }
}

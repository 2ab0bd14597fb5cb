use chipscout_core::filter::{FilterOp, FilterState};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Default, Clone)]
pub struct FilterArgs {
    /// Serialized state to start from.
    pub state: Option<String>,
    pub category: Option<String>,
    pub brands: Vec<String>,
    pub packages: Vec<String>,
    /// `name=value` pairs.
    pub parameters: Vec<String>,
    pub query: Option<String>,
    /// JSON array of operations applied after the flag-driven ones.
    pub ops: Option<String>,
}

#[derive(Debug, Serialize)]
struct FilterOutput {
    state: FilterState,
    result_count: u32,
    selected_facets: usize,
    summary: Vec<String>,
    serialized: String,
    query_string: String,
}

pub fn run(args: &FilterArgs) -> CommandResult {
    let ops = match collect_ops(args) {
        Ok(ops) => ops,
        Err(message) => return CommandResult::invalid_input("filter", message),
    };

    let base = args.state.as_deref().map(FilterState::deserialize).unwrap_or_default();
    let state = base.apply_all(&ops);

    let output = FilterOutput {
        result_count: state.result_count(),
        selected_facets: state.count_selected_facets(),
        summary: state.summarize(),
        serialized: state.serialize(),
        query_string: state.to_query_string(args.category.as_deref()),
        state,
    };
    CommandResult::success_with_data(
        "filter",
        format!("{} results", output.result_count),
        &output,
    )
}

fn collect_ops(args: &FilterArgs) -> Result<Vec<FilterOp>, String> {
    let mut ops = Vec::new();

    for brand in &args.brands {
        ops.push(FilterOp::ToggleBrand { brand: brand.clone(), included: true });
    }
    for package in &args.packages {
        ops.push(FilterOp::TogglePackage { package: package.clone(), included: true });
    }
    for pair in &args.parameters {
        let (category, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("parameter `{pair}` must look like name=value"))?;
        ops.push(FilterOp::ToggleParameter {
            category: category.to_string(),
            value: value.to_string(),
            included: true,
        });
    }
    if let Some(text) = &args.query {
        ops.push(FilterOp::SetQuery { text: text.clone() });
    }
    if let Some(raw) = &args.ops {
        let extra: Vec<FilterOp> =
            serde_json::from_str(raw).map_err(|error| format!("invalid --ops JSON: {error}"))?;
        ops.extend(extra);
    }

    Ok(ops)
}

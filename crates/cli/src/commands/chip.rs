use chipscout_core::catalog::{Chip, StaticCatalog};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct ChipOutput<'a> {
    chip: &'a Chip,
    alternatives: Vec<&'a Chip>,
}

pub fn run(id: &str) -> CommandResult {
    let catalog = StaticCatalog::global();
    let chip = match catalog.chip(id) {
        Ok(chip) => chip,
        Err(error) => return CommandResult::not_found("chip", error),
    };
    let alternatives = match catalog.alternatives(&chip.id) {
        Ok(alternatives) => alternatives,
        Err(error) => return CommandResult::not_found("chip", error),
    };

    CommandResult::success_with_data(
        "chip",
        format!("{} ({})", chip.part_number, chip.manufacturer),
        &ChipOutput { chip, alternatives },
    )
}

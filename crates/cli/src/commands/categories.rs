use chipscout_core::catalog::{CatalogError, Category, Chip, StaticCatalog};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct CategoryNode<'a> {
    #[serde(flatten)]
    category: &'a Category,
    subcategories: Vec<&'a Category>,
}

#[derive(Debug, Serialize)]
struct CategoryDetail<'a> {
    category: &'a Category,
    subcategories: Vec<&'a Category>,
    chips: Vec<&'a Chip>,
}

/// The category tree, or one category with its chips when `id` is given.
pub fn run(id: Option<&str>) -> CommandResult {
    let result = match id {
        Some(id) => detail(id),
        None => tree(),
    };
    result.unwrap_or_else(|error| CommandResult::not_found("categories", error))
}

fn tree() -> Result<CommandResult, CatalogError> {
    let catalog = StaticCatalog::global();
    let mut nodes = Vec::new();
    for category in catalog.root_categories() {
        nodes.push(CategoryNode { category, subcategories: catalog.subcategories(&category.id)? });
    }

    Ok(CommandResult::success_with_data(
        "categories",
        format!("{} top-level categories", nodes.len()),
        &nodes,
    ))
}

fn detail(id: &str) -> Result<CommandResult, CatalogError> {
    let catalog = StaticCatalog::global();
    let category = catalog.category(id)?;
    let detail = CategoryDetail {
        category,
        subcategories: catalog.subcategories(&category.id)?,
        chips: catalog.chips_in_category(&category.id)?,
    };

    Ok(CommandResult::success_with_data(
        "categories",
        format!("{}: {} chips", category.name, detail.chips.len()),
        &detail,
    ))
}

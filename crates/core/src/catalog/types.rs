//! Records served by the static catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Active,
    /// Not recommended for new designs.
    Nrnd,
    Obsolete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyParameter {
    /// Parameter category, matching the keys used by filter state (`voltage`, `core`, ...).
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub id: String,
    pub part_number: String,
    pub name: String,
    pub manufacturer: String,
    pub category_id: String,
    pub package: String,
    pub description: String,
    pub key_parameters: Vec<KeyParameter>,
    pub datasheet_url: String,
    pub lifecycle: Lifecycle,
    pub alternative_ids: Vec<String>,
}

impl Chip {
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.key_parameters
            .iter()
            .find(|parameter| parameter.name.eq_ignore_ascii_case(name))
            .map(|parameter| parameter.value.as_str())
    }

    pub(crate) fn matches_text(&self, normalized_query: &str) -> bool {
        [&self.part_number, &self.name, &self.manufacturer, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(normalized_query))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterFacet {
    pub name: String,
    pub values: Vec<String>,
}

/// Filter dimensions offered while browsing a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacets {
    pub brands: Vec<String>,
    pub packages: Vec<String>,
    pub parameters: Vec<ParameterFacet>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
    /// Simulated size of the category in a full distributor catalog.
    pub chip_count: u32,
    pub facets: CategoryFacets,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreak {
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorOffer {
    pub distributor: String,
    pub sku: String,
    pub stock: u32,
    pub currency: String,
    /// Sorted by ascending quantity.
    pub price_breaks: Vec<PriceBreak>,
}

impl DistributorOffer {
    /// Unit price of the largest break whose quantity does not exceed `quantity`.
    pub fn unit_price_for(&self, quantity: u32) -> Option<Decimal> {
        self.price_breaks
            .iter()
            .take_while(|price_break| price_break.quantity <= quantity)
            .last()
            .map(|price_break| price_break.unit_price)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub chip_id: String,
    pub min_order_quantity: u32,
    pub lead_time_weeks: u32,
    pub offers: Vec<DistributorOffer>,
}

impl OrderDetails {
    pub fn total_stock(&self) -> u64 {
        self.offers.iter().map(|offer| u64::from(offer.stock)).sum()
    }

    /// Cheapest offer that can fill `quantity` from stock, with its unit price.
    pub fn best_offer(&self, quantity: u32) -> Option<(&DistributorOffer, Decimal)> {
        if quantity < self.min_order_quantity {
            return None;
        }

        self.offers
            .iter()
            .filter(|offer| offer.stock >= quantity)
            .filter_map(|offer| offer.unit_price_for(quantity).map(|price| (offer, price)))
            .min_by(|(_, left), (_, right)| left.cmp(right))
    }
}

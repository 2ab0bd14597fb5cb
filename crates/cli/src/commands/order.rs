use chipscout_core::catalog::{OrderDetails, StaticCatalog};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct OrderQuote<'a> {
    distributor: &'a str,
    sku: &'a str,
    currency: &'a str,
    unit_price: Decimal,
    total_price: Decimal,
}

#[derive(Debug, Serialize)]
struct OrderOutput<'a> {
    quantity: u32,
    total_stock: u64,
    order: &'a OrderDetails,
    quote: Option<OrderQuote<'a>>,
}

/// Distributor offers for a chip and the cheapest in-stock price at `quantity`
/// (the minimum order quantity when not given).
pub fn run(id: &str, quantity: Option<u32>) -> CommandResult {
    let order = match StaticCatalog::global().order_details(id) {
        Ok(order) => order,
        Err(error) => return CommandResult::not_found("order", error),
    };

    let quantity = quantity.unwrap_or(order.min_order_quantity);
    let quote = order.best_offer(quantity).map(|(offer, unit_price)| OrderQuote {
        distributor: &offer.distributor,
        sku: &offer.sku,
        currency: &offer.currency,
        unit_price,
        total_price: unit_price * Decimal::from(quantity),
    });

    let message = match &quote {
        Some(quote) => format!(
            "{quantity} x {} from {} at {} {} each",
            order.chip_id, quote.distributor, quote.unit_price, quote.currency
        ),
        None => format!(
            "no offer covers {quantity} x {} (minimum order {}, {} in stock)",
            order.chip_id,
            order.min_order_quantity,
            order.total_stock()
        ),
    };

    CommandResult::success_with_data(
        "order",
        message,
        &OrderOutput { quantity, total_stock: order.total_stock(), order, quote },
    )
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::apparel::Apparel;

/// One requested line of a customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub code: String,
    pub size: String,
    /// Units requested; callers validate this is positive before we see it.
    pub quantity: u32,
}

/// A customer order: an opaque identifier and its requested lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
}

/// Why (and by how much) a single order line cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub code: String,
    pub size: String,
    pub requested_quantity: u32,
    /// Actual stock on hand; zero when the code or size does not exist.
    pub available_quantity: u32,
}

/// Outcome of checking an order against current stock.
///
/// `missing_items` is always present (an empty array when fulfillable);
/// `total_cost` is present only when costing was requested and the order is
/// fulfillable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResult {
    pub can_fulfill: bool,
    pub missing_items: Vec<Shortfall>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub total_cost: Option<Decimal>,
}

impl FulfillmentResult {
    /// Result for a fully fulfillable order with its total cost.
    pub fn fulfilled(total_cost: Decimal) -> Self {
        Self {
            can_fulfill: true,
            missing_items: Vec::new(),
            total_cost: Some(total_cost),
        }
    }
}

/// Check every order line against current stock, in input order.
///
/// A line referencing a missing code or size shortfalls with zero available
/// units; a line requesting more than is on hand shortfalls with the actual
/// quantity. Read-only: no reservation or decrement happens here.
pub fn check_order(catalog: &[Apparel], order: &Order) -> FulfillmentResult {
    let mut missing_items = Vec::new();

    for line in &order.items {
        let available = catalog
            .iter()
            .find(|a| a.code == line.code)
            .and_then(|a| a.variant(&line.size))
            .map(|v| v.quantity)
            .unwrap_or(0);

        if available < line.quantity {
            missing_items.push(Shortfall {
                code: line.code.clone(),
                size: line.size.clone(),
                requested_quantity: line.quantity,
                available_quantity: available,
            });
        }
    }

    FulfillmentResult {
        can_fulfill: missing_items.is_empty(),
        missing_items,
        total_cost: None,
    }
}

/// Sum `price * quantity` over all order lines against this snapshot.
///
/// Returns `None` if any line's variant is absent from the snapshot, which
/// callers hit only when stock changed between their fulfillment check and
/// this pricing pass.
pub fn price_order(catalog: &[Apparel], order: &Order) -> Option<Decimal> {
    let mut total = Decimal::ZERO;

    for line in &order.items {
        let variant = catalog
            .iter()
            .find(|a| a.code == line.code)?
            .variant(&line.size)?;
        total += variant.price * Decimal::from(line.quantity);
    }

    Some(total)
}

use rust_decimal::Decimal;
use serde::Deserialize;

use stockroom_catalog::{Order, OrderLine, StockUpdate};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `PUT /api/inventory/update` (and each element of the batch
/// variant). Range/presence checks happen here, before the engine sees it.
#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub code: String,
    pub size: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl UpdateStockRequest {
    pub fn into_update(self) -> Result<StockUpdate, String> {
        if self.code.trim().is_empty() || self.size.trim().is_empty() {
            return Err("code and size are required".to_string());
        }
        if self.quantity < 0 || self.price < Decimal::ZERO {
            return Err("quantity and price must be non-negative".to_string());
        }
        let quantity = u32::try_from(self.quantity).map_err(|_| "quantity out of range".to_string())?;

        Ok(StockUpdate {
            code: self.code,
            size: self.size,
            quantity,
            price: self.price,
        })
    }
}

/// Body of the fulfillment-check and cost endpoints.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    /// Opaque order identifier; carried through, never validated.
    #[serde(default)]
    pub id: String,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub code: String,
    pub size: String,
    pub quantity: i64,
}

impl OrderRequest {
    pub fn into_order(self) -> Result<Order, String> {
        if self.items.is_empty() {
            return Err("order must include at least one item".to_string());
        }

        let mut items = Vec::with_capacity(self.items.len());
        for line in self.items {
            if line.code.trim().is_empty() || line.size.trim().is_empty() {
                return Err("each order item must include code and size".to_string());
            }
            if line.quantity <= 0 {
                return Err("each order item quantity must be positive".to_string());
            }
            let quantity =
                u32::try_from(line.quantity).map_err(|_| "quantity out of range".to_string())?;
            items.push(OrderLine {
                code: line.code,
                size: line.size,
                quantity,
            });
        }

        Ok(Order { id: self.id, items })
    }
}

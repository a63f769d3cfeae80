use std::sync::Arc;

use thiserror::Error;

use stockroom_catalog::{
    Apparel, FulfillmentResult, Order, StockUpdate, check_order, merge_batch, merge_update,
    price_order,
};
use stockroom_store::{InventoryStore, StoreError};

/// Failure of an engine operation.
///
/// The engine never retries or swallows a store failure; it propagates
/// unmodified for the transport layer to map.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The inventory service layer.
///
/// Concurrent mutating calls race at whole-snapshot granularity: each one
/// loads, mutates its own copy, and writes the full catalog back, so the
/// last writer wins. Callers needing stronger guarantees must serialize
/// writes externally.
pub struct InventoryEngine {
    store: Arc<dyn InventoryStore>,
}

impl InventoryEngine {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Upsert one size variant's quantity and price, returning the affected
    /// apparel entry as persisted.
    pub async fn update_stock(&self, update: StockUpdate) -> Result<Apparel, EngineError> {
        let mut catalog = self.store.load().await?;
        let affected = merge_update(&mut catalog, &update).clone();
        self.store.save(&catalog).await?;

        tracing::info!(code = %update.code, size = %update.size, quantity = update.quantity, "stock updated");
        Ok(affected)
    }

    /// Apply a batch of stock updates against one snapshot, persisting once.
    ///
    /// Returns one entry per distinct code touched, in first-touched order,
    /// each reflecting its final post-batch state. The single save makes the
    /// batch all-or-nothing from the store's point of view.
    pub async fn update_stock_batch(
        &self,
        updates: Vec<StockUpdate>,
    ) -> Result<Vec<Apparel>, EngineError> {
        let mut catalog = self.store.load().await?;
        let affected = merge_batch(&mut catalog, &updates);
        self.store.save(&catalog).await?;

        tracing::info!(updates = updates.len(), codes = affected.len(), "stock batch applied");
        Ok(affected)
    }

    /// Check whether every order line is satisfiable by current stock.
    ///
    /// Point-in-time read: nothing is reserved or decremented, so a
    /// concurrent update can invalidate the result before the caller acts
    /// on it.
    pub async fn check_fulfillment(&self, order: &Order) -> Result<FulfillmentResult, EngineError> {
        let catalog = self.store.load().await?;
        Ok(check_order(&catalog, order))
    }

    /// Check the order and, when fulfillable, price it.
    ///
    /// The check and the pricing pass each load their own snapshot, so a
    /// stock or price change can land between them. When that removes a
    /// line's variant outright, the fresh snapshot's shortfalls are
    /// reported instead of a price.
    pub async fn calculate_cost(&self, order: &Order) -> Result<FulfillmentResult, EngineError> {
        let check = self.check_fulfillment(order).await?;
        if !check.can_fulfill {
            return Ok(check);
        }

        let catalog = self.store.load().await?;
        match price_order(&catalog, order) {
            Some(total) => Ok(FulfillmentResult::fulfilled(total)),
            None => {
                tracing::warn!(order_id = %order.id, "stock changed between check and pricing");
                Ok(check_order(&catalog, order))
            }
        }
    }

    /// Full catalog snapshot, in storage order.
    pub async fn get_all(&self) -> Result<Vec<Apparel>, EngineError> {
        Ok(self.store.load().await?)
    }

    /// Point lookup by code; absence is a value, not an error.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Apparel>, EngineError> {
        let catalog = self.store.load().await?;
        Ok(catalog.into_iter().find(|a| a.code == code))
    }
}

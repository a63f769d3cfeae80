//! Catalog domain module.
//!
//! This crate contains business rules for the apparel catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! engine crate composes these functions over a persisted snapshot.

pub mod apparel;
pub mod fulfillment;

pub use apparel::{Apparel, SizeVariant, StockUpdate, merge_batch, merge_update};
pub use fulfillment::{
    FulfillmentResult, Order, OrderLine, Shortfall, check_order, price_order,
};

//! Inventory engine: the service layer composing the pure catalog rules
//! over an [`InventoryStore`](stockroom_store::InventoryStore).
//!
//! Every operation is a self-contained load -> compute -> (save) cycle; the
//! engine holds no catalog state between calls and takes no locks.

pub mod service;

pub use service::{EngineError, InventoryEngine};

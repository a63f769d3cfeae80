//! Inventory store abstraction and implementations.
//!
//! The engine depends only on [`InventoryStore`]: whole-snapshot `load` and
//! `save` of the apparel catalog. [`JsonFileStore`] is the production
//! file-backed implementation; [`InMemoryStore`] backs tests.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use stockroom_catalog::Apparel;

/// Durable, whole-snapshot persistence of the apparel catalog.
///
/// Each `save` is a single, complete replacement of the prior content,
/// never an incremental patch. A store that has never been saved to loads
/// as an empty catalog.
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// Load the full catalog, or an empty one if none has ever been saved.
    async fn load(&self) -> Result<Vec<Apparel>, StoreError>;

    /// Persist the full catalog, replacing any prior content.
    async fn save(&self, catalog: &[Apparel]) -> Result<(), StoreError>;
}

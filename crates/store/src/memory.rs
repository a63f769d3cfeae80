//! In-memory inventory store (tests and local experiments).

use std::sync::Mutex;

use stockroom_catalog::Apparel;

use crate::{InventoryStore, StoreError};

/// Whole-snapshot store holding the catalog behind a mutex.
///
/// Mirrors the file store's contract: `load` hands out a copy of the last
/// saved snapshot, `save` replaces it entirely.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Vec<Apparel>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-seeded catalog.
    pub fn with_catalog(catalog: Vec<Apparel>) -> Self {
        Self {
            inner: Mutex::new(catalog),
        }
    }

    /// Copy of the current snapshot, for assertions.
    pub fn snapshot(&self) -> Vec<Apparel> {
        self.inner.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait::async_trait]
impl InventoryStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<Apparel>, StoreError> {
        Ok(self.inner.lock().expect("store mutex poisoned").clone())
    }

    async fn save(&self, catalog: &[Apparel]) -> Result<(), StoreError> {
        *self.inner.lock().expect("store mutex poisoned") = catalog.to_vec();
        Ok(())
    }
}

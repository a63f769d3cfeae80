//! JSON-file-backed inventory store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stockroom_catalog::Apparel;

use crate::{InventoryStore, StoreError};

/// On-disk document: `{"inventory": [...]}`.
#[derive(Debug, Deserialize)]
struct InventoryDocument {
    #[serde(default)]
    inventory: Vec<Apparel>,
}

#[derive(Debug, Serialize)]
struct InventoryDocumentRef<'a> {
    inventory: &'a [Apparel],
}

/// Inventory store persisting the whole catalog as one pretty-printed JSON
/// document.
///
/// A missing file is an initialization case, not an error: the first `load`
/// materializes an empty document and returns an empty catalog. Every other
/// IO or decode failure propagates as a [`StoreError`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl InventoryStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Apparel>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "inventory file absent; materializing empty catalog");
                self.save(&[]).await?;
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let document: InventoryDocument = serde_json::from_slice(&bytes)?;
        Ok(document.inventory)
    }

    async fn save(&self, catalog: &[Apparel]) -> Result<(), StoreError> {
        let document = InventoryDocumentRef { inventory: catalog };
        let bytes = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(&self.path, bytes).await?;
        tracing::debug!(path = %self.path.display(), entries = catalog.len(), "inventory snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockroom_catalog::SizeVariant;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("stockroom-{}-{}-{}.json", name, std::process::id(), nanos))
    }

    fn sample_catalog() -> Vec<Apparel> {
        vec![Apparel {
            code: "TSHIRT001".to_string(),
            sizes: vec![SizeVariant {
                size: "M".to_string(),
                quantity: 15,
                price: Decimal::from(15),
            }],
        }]
    }

    #[tokio::test]
    async fn first_load_materializes_an_empty_document() {
        let path = scratch_path("first-load");
        let store = JsonFileStore::new(&path);

        let catalog = store.load().await.unwrap();
        assert!(catalog.is_empty());

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"inventory\""));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn save_then_load_round_trips_the_catalog() {
        let path = scratch_path("round-trip");
        let store = JsonFileStore::new(&path);

        store.save(&sample_catalog()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, sample_catalog());

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn load_accepts_a_document_with_no_inventory_field() {
        let path = scratch_path("no-field");
        std::fs::write(&path, "{}").unwrap();

        let store = JsonFileStore::new(&path);
        let catalog = store.load().await.unwrap();
        assert!(catalog.is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn corrupt_document_is_a_store_error() {
        let path = scratch_path("corrupt");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Document(_)));

        std::fs::remove_file(&path).unwrap();
    }
}

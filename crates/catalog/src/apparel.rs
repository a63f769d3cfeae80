use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One size's stock line within an apparel entry.
///
/// `size` is a free-form label ("M", "32", "ONE_SIZE"); it is unique within
/// the owning apparel's size sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub size: String,
    /// Units currently in stock.
    pub quantity: u32,
    /// Unit price currently in effect.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// One catalog entry: a product code and its size variants.
///
/// `code` is the primary key of the catalog; no two entries share a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apparel {
    pub code: String,
    pub sizes: Vec<SizeVariant>,
}

impl Apparel {
    /// Create an entry with no size variants yet.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            sizes: Vec::new(),
        }
    }

    /// Look up a size variant by its label.
    pub fn variant(&self, size: &str) -> Option<&SizeVariant> {
        self.sizes.iter().find(|v| v.size == size)
    }
}

/// A request to set a variant's quantity and price to the given values.
///
/// Absolute set, not an incremental delta. Upsert semantics: a missing
/// apparel or size variant is created by the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub code: String,
    pub size: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Merge a single stock update into the catalog, returning the affected
/// (possibly newly created) apparel entry.
///
/// A new apparel entry is appended at the end of the catalog; a new size
/// variant is appended at the end of the apparel's size sequence. An
/// existing variant has its quantity and price overwritten in place.
pub fn merge_update<'a>(catalog: &'a mut Vec<Apparel>, update: &StockUpdate) -> &'a Apparel {
    let idx = match catalog.iter().position(|a| a.code == update.code) {
        Some(idx) => idx,
        None => {
            catalog.push(Apparel::new(update.code.clone()));
            catalog.len() - 1
        }
    };

    let apparel = &mut catalog[idx];
    match apparel.sizes.iter_mut().find(|v| v.size == update.size) {
        Some(variant) => {
            variant.quantity = update.quantity;
            variant.price = update.price;
        }
        None => apparel.sizes.push(SizeVariant {
            size: update.size.clone(),
            quantity: update.quantity,
            price: update.price,
        }),
    }

    &catalog[idx]
}

/// Merge a batch of stock updates, in input order, against one shared
/// catalog snapshot.
///
/// Later updates to the same `(code, size)` pair win. Returns one apparel
/// entry per distinct code touched by the batch, each reflecting its final
/// post-batch state, in first-touched order.
pub fn merge_batch(catalog: &mut Vec<Apparel>, updates: &[StockUpdate]) -> Vec<Apparel> {
    let mut touched: Vec<String> = Vec::new();

    for update in updates {
        merge_update(catalog, update);
        if !touched.iter().any(|code| code == &update.code) {
            touched.push(update.code.clone());
        }
    }

    touched
        .iter()
        .filter_map(|code| catalog.iter().find(|a| &a.code == code).cloned())
        .collect()
}

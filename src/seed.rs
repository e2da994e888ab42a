//! Bundled default datasets
//!
//! Used only when a collection has no persisted snapshot — a fresh install
//! starts from these records instead of an empty application.

use crate::core::entity::{Invoice, LineItem, Product};
use crate::core::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const LINE_ITEMS_JSON: &str = include_str!("../data/line_items.json");
const INVOICES_JSON: &str = include_str!("../data/invoices.json");

/// Default datasets for the three collections
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub line_items: Vec<LineItem>,
    pub invoices: Vec<Invoice>,
}

impl SeedData {
    /// The datasets bundled with the crate
    pub fn bundled() -> StoreResult<Self> {
        Ok(Self {
            products: parse(PRODUCTS_JSON, "products")?,
            line_items: parse(LINE_ITEMS_JSON, "lineItems")?,
            invoices: parse(INVOICES_JSON, "invoices")?,
        })
    }

    /// No seed records at all; collections without a snapshot start empty
    pub fn empty() -> Self {
        Self::default()
    }
}

fn parse<T: DeserializeOwned>(raw: &str, collection: &'static str) -> StoreResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
        collection,
        message: e.to_string(),
    })
}

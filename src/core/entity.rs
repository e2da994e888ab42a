//! Record types held by the invoice store

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix used for display codes on invoice records (e.g. "ORS-007").
pub const CODE_PREFIX: &str = "ORS";

/// Base trait for all records managed by the store.
///
/// Records are identified by a numeric id that is unique within their
/// collection, and each record type maps to exactly one snapshot key in
/// persistent storage.
pub trait Record: Clone + Send + Sync + 'static {
    /// The snapshot key under which this collection is persisted
    /// (e.g. "invoices")
    fn collection() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> u64;
}

/// Derive the display code for an invoice id.
///
/// The numeric id is zero-padded to a minimum width of three digits and
/// prefixed with [`CODE_PREFIX`]. Padding never truncates: ids wider than
/// three digits keep their full width.
///
/// ```
/// use orsi::core::entity::invoice_code;
///
/// assert_eq!(invoice_code(7), "ORS-007");
/// assert_eq!(invoice_code(1042), "ORS-1042");
/// ```
pub fn invoice_code(id: u64) -> String {
    format!("{}-{:03}", CODE_PREFIX, id)
}

/// A billing record.
///
/// Beyond `id` and the derived `invoice_number`, the shape of an invoice is
/// owned entirely by the caller: all other fields are carried opaquely in
/// `details` and round-trip through serialization untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Unique identifier within the invoice collection
    pub id: u64,

    /// Display code derived from `id` via [`invoice_code`]
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,

    /// Caller-owned billing fields (client, dates, totals, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Invoice {
    /// Create a new invoice with the display code derived from `id`
    pub fn new(id: u64) -> Self {
        Self {
            id,
            invoice_number: invoice_code(id),
            details: Map::new(),
        }
    }

    /// Attach a billing field
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }
}

impl Record for Invoice {
    fn collection() -> &'static str {
        "invoices"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Reference data describing a sellable product.
///
/// Products are loaded once at store construction and never mutated by the
/// store's operations; invoices refer to them by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier within the product collection
    pub id: u64,

    /// Caller-owned product fields (name, unit price, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Record for Product {
    fn collection() -> &'static str {
        "products"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Reference data describing one line on an order.
///
/// Like [`Product`], line items are read-only for the lifetime of the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique identifier within the line-item collection
    pub id: u64,

    /// Caller-owned line fields (product id, quantity, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Record for LineItem {
    fn collection() -> &'static str {
        "lineItems"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

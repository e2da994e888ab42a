//! Typed error handling for the invoice store
//!
//! Lookup misses (`invoice_by_id`, `update_invoice`, `delete_invoice` on a
//! nonexistent id) are deliberately *not* errors — they are defined as
//! no-ops / absent results. Only the conditions below surface as failures:
//!
//! - [`StoreError::Corrupt`]: a persisted snapshot exists but cannot be
//!   deserialized at store construction
//! - [`StoreError::DuplicateId`]: `create_invoice` called with an id that
//!   is already present
//! - [`StoreError::NoInvoices`]: `next_invoice_ids` called on an empty
//!   collection (the max-id reduction has no identity element)
//! - [`StoreError::Snapshot`]: the persistence backend failed to read or
//!   write a snapshot

use std::fmt;

/// The error type for all invoice-store operations
#[derive(Debug)]
pub enum StoreError {
    /// A persisted snapshot is present but not deserializable
    Corrupt {
        collection: &'static str,
        message: String,
    },

    /// An invoice with this id already exists
    DuplicateId { id: u64 },

    /// The invoice collection is empty, so no next id can be derived
    NoInvoices,

    /// The snapshot backend failed
    Snapshot { message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Corrupt {
                collection,
                message,
            } => {
                write!(
                    f,
                    "persisted '{}' snapshot is corrupt: {}",
                    collection, message
                )
            }
            StoreError::DuplicateId { id } => {
                write!(f, "invoice with id '{}' already exists", id)
            }
            StoreError::NoInvoices => {
                write!(f, "no invoices in the collection")
            }
            StoreError::Snapshot { message } => {
                write!(f, "snapshot backend error: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Snapshot {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for invoice-store operations
pub type StoreResult<T> = Result<T, StoreError>;

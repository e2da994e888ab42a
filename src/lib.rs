//! # ORSI
//!
//! A local-first invoice management core: in-memory collections of
//! invoices, products, and line items, mirrored to snapshot storage after
//! every mutation.
//!
//! ## Features
//!
//! - **Snapshot Persistence**: every mutation synchronously rewrites the
//!   full invoice snapshot before returning
//! - **Seed Fallback**: collections with no persisted snapshot initialize
//!   from bundled default datasets
//! - **Derived Display Codes**: invoice numbers are derived from numeric
//!   ids (`7` → `"ORS-007"`), never assigned independently
//! - **Explicit Ownership**: the store is a plain value passed by
//!   reference — no global singleton, no framework reactivity
//! - **Observer Callbacks**: subscribers are notified after each
//!   successful mutation
//! - **Pluggable Backends**: in-memory, file-per-key JSON, or embedded
//!   LMDB (feature `lmdb`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orsi::prelude::*;
//!
//! let config = StoreConfig::default();
//! let backend = open_backend(&config)?;
//! let mut store = InvoiceStore::open(backend, SeedData::bundled()?)?;
//!
//! let next = store.next_invoice_ids()?;
//! store.create_invoice(
//!     Invoice::new(next.id).with_detail("client", "Acme Corp".into()),
//! )?;
//! ```

pub mod config;
pub mod core;
pub mod seed;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{CODE_PREFIX, Invoice, LineItem, Product, Record, invoice_code},
        error::{StoreError, StoreResult},
        store::{InvoiceStore, NextInvoiceIds, StoreEvent},
    };

    // === Seed data ===
    pub use crate::seed::SeedData;

    // === Storage ===
    pub use crate::storage::{FileSnapshots, InMemorySnapshots, SnapshotStore, open_backend};
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbSnapshots;

    // === Config ===
    pub use crate::config::{BackendKind, StoreConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}

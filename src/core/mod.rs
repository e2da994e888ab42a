//! Core module containing the record types, store, and error types

pub mod entity;
pub mod error;
pub mod store;

pub use entity::{CODE_PREFIX, Invoice, LineItem, Product, Record, invoice_code};
pub use error::{StoreError, StoreResult};
pub use store::{InvoiceStore, NextInvoiceIds, StoreEvent};

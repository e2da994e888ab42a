//! The invoice store: in-memory collections mirrored to snapshot storage
//!
//! [`InvoiceStore`] owns three collections for the lifetime of the process:
//! invoices (mutable through the operations below) and two read-only
//! reference collections, products and line items. Construction loads each
//! collection from its persisted snapshot, falling back to seed data when
//! no snapshot exists. Every mutating operation applies to the in-memory
//! collection first, then synchronously rewrites the full invoice snapshot
//! before returning — two sequential calls always observe a fully-persisted
//! intermediate state.
//!
//! The store is an explicitly owned value, not a process-wide singleton:
//! pass it by reference to whichever components need it. Callers that want
//! to react to mutations register a callback via [`InvoiceStore::subscribe`].

use crate::core::entity::{Invoice, LineItem, Product, Record, invoice_code};
use crate::core::error::{StoreError, StoreResult};
use crate::seed::SeedData;
use crate::storage::SnapshotStore;
use serde::de::DeserializeOwned;

/// The next free invoice id paired with its derived display code.
///
/// Returned by [`InvoiceStore::next_invoice_ids`]. Computing this does not
/// reserve the id; the caller is expected to follow up with
/// [`InvoiceStore::create_invoice`] using these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextInvoiceIds {
    pub id: u64,
    pub invoice_number: String,
}

/// Notification emitted to subscribers after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Created { id: u64 },
    Updated { id: u64 },
    Deleted { id: u64 },
}

type Observer = Box<dyn Fn(&StoreEvent) + Send>;

/// In-memory invoice collections mirrored to a snapshot backend
pub struct InvoiceStore {
    products: Vec<Product>,
    line_items: Vec<LineItem>,
    invoices: Vec<Invoice>,
    snapshots: Box<dyn SnapshotStore>,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for InvoiceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvoiceStore")
            .field("products", &self.products)
            .field("line_items", &self.line_items)
            .field("invoices", &self.invoices)
            .finish_non_exhaustive()
    }
}


impl InvoiceStore {
    /// Open a store against `snapshots`, seeding collections whose snapshot
    /// key is absent from `seed`.
    ///
    /// A snapshot that is present but not deserializable is a construction
    /// error ([`StoreError::Corrupt`]); there is no silent fallback to seed
    /// data for corrupt state.
    pub fn open<S>(snapshots: S, seed: SeedData) -> StoreResult<Self>
    where
        S: SnapshotStore + 'static,
    {
        let snapshots: Box<dyn SnapshotStore> = Box::new(snapshots);

        let products = load_collection(snapshots.as_ref(), seed.products)?;
        let line_items = load_collection(snapshots.as_ref(), seed.line_items)?;
        let invoices = load_collection(snapshots.as_ref(), seed.invoices)?;

        tracing::info!(
            products = products.len(),
            line_items = line_items.len(),
            invoices = invoices.len(),
            "invoice store opened"
        );

        Ok(Self {
            products,
            line_items,
            invoices,
            snapshots,
            observers: Vec::new(),
        })
    }

    /// Register a callback fired after every successful mutation.
    ///
    /// Replaces framework-level reactivity: the store itself is plain data
    /// and functions, and UI layers bind to it through these callbacks.
    pub fn subscribe(&mut self, observer: impl Fn(&StoreEvent) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Read operations (never touch the snapshot backend) ===

    /// All invoices, in insertion order
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Read-only product reference data
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Read-only line-item reference data
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Get the first invoice whose id matches, or `None`
    pub fn invoice_by_id(&self, invoice_id: u64) -> Option<&Invoice> {
        self.invoices.iter().find(|item| item.id == invoice_id)
    }

    /// Compute the next free invoice id and its display code.
    ///
    /// The id is one past the maximum id currently in memory; the code is
    /// derived via [`invoice_code`]. Fails with [`StoreError::NoInvoices`]
    /// when the collection is empty.
    pub fn next_invoice_ids(&self) -> StoreResult<NextInvoiceIds> {
        let max_id = self
            .invoices
            .iter()
            .map(|item| item.id)
            .max()
            .ok_or(StoreError::NoInvoices)?;

        let id = max_id + 1;

        Ok(NextInvoiceIds {
            id,
            invoice_number: invoice_code(id),
        })
    }

    // === Mutating operations (persist the full invoice snapshot) ===

    /// Append an invoice to the collection.
    ///
    /// The caller is responsible for obtaining a fresh id via
    /// [`Self::next_invoice_ids`]; an id already present in the collection
    /// is rejected with [`StoreError::DuplicateId`] and nothing is
    /// persisted.
    pub fn create_invoice(&mut self, invoice: Invoice) -> StoreResult<()> {
        let id = invoice.id;
        if self.invoices.iter().any(|item| item.id == id) {
            return Err(StoreError::DuplicateId { id });
        }

        self.invoices.push(invoice);
        self.persist_invoices()?;

        tracing::debug!(id, "invoice created");
        self.notify(StoreEvent::Created { id });
        Ok(())
    }

    /// Replace the invoice whose id matches `invoice.id`, in place.
    ///
    /// The entry keeps its position in the collection; all other entries
    /// are untouched. A missing id is a no-op, not an error. The full
    /// snapshot is re-persisted either way.
    pub fn update_invoice(&mut self, invoice: Invoice) -> StoreResult<()> {
        let id = invoice.id;
        if let Some(slot) = self.invoices.iter_mut().find(|item| item.id == id) {
            *slot = invoice;
        }

        self.persist_invoices()?;

        tracing::debug!(id, "invoice updated");
        self.notify(StoreEvent::Updated { id });
        Ok(())
    }

    /// Remove every invoice whose id matches, preserving the relative
    /// order of the remainder.
    ///
    /// A missing id is a no-op, not an error. The full snapshot is
    /// re-persisted either way.
    pub fn delete_invoice(&mut self, id: u64) -> StoreResult<()> {
        self.invoices.retain(|item| item.id != id);
        self.persist_invoices()?;

        tracing::debug!(id, "invoice deleted");
        self.notify(StoreEvent::Deleted { id });
        Ok(())
    }

    /// Serialize the full invoice collection and overwrite its snapshot.
    ///
    /// Products and line items are never written back: the store treats
    /// them as read-only reference data.
    fn persist_invoices(&self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.invoices).map_err(|e| StoreError::Snapshot {
            message: e.to_string(),
        })?;

        self.snapshots.put(Invoice::collection(), &raw)?;

        tracing::debug!(count = self.invoices.len(), "invoice snapshot written");
        Ok(())
    }

    fn notify(&self, event: StoreEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }
}

/// Load one collection: persisted snapshot if present, seed fallback if not.
fn load_collection<T>(snapshots: &dyn SnapshotStore, fallback: Vec<T>) -> StoreResult<Vec<T>>
where
    T: Record + DeserializeOwned,
{
    let key = T::collection();

    match snapshots.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            collection: key,
            message: e.to_string(),
        }),
        None => {
            tracing::debug!(collection = key, seeded = fallback.len(), "no snapshot found");
            Ok(fallback)
        }
    }
}

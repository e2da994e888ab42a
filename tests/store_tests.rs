//! Integration tests for the invoice store over the in-memory backend.
//!
//! These exercise the store's externally observable contract: seed
//! fallback, snapshot round-trips, targeted update/delete, id derivation,
//! and observer notification.

use orsi::prelude::*;
use serde_json::json;
use std::sync::{Arc, Mutex};

fn invoice(id: u64, client: &str) -> Invoice {
    Invoice::new(id).with_detail("client", json!(client))
}

fn store_with(ids: &[u64]) -> (InvoiceStore, InMemorySnapshots) {
    let snapshots = InMemorySnapshots::new();
    let mut store = InvoiceStore::open(snapshots.clone(), SeedData::empty()).unwrap();
    for &id in ids {
        store.create_invoice(Invoice::new(id)).unwrap();
    }
    (store, snapshots)
}

#[test]
fn seed_fallback_yields_bundled_defaults() {
    let seed = SeedData::bundled().unwrap();
    let store = InvoiceStore::open(InMemorySnapshots::new(), seed.clone()).unwrap();

    assert_eq!(store.invoices(), seed.invoices.as_slice());
    assert_eq!(store.products(), seed.products.as_slice());
    assert_eq!(store.line_items(), seed.line_items.as_slice());
}

#[test]
fn persisted_snapshot_wins_over_seed() {
    let snapshots = InMemorySnapshots::new();
    snapshots
        .put("invoices", r#"[{"id":41,"invoiceNumber":"ORS-041"}]"#)
        .unwrap();

    let store = InvoiceStore::open(snapshots, SeedData::bundled().unwrap()).unwrap();
    assert_eq!(store.invoices().len(), 1);
    assert_eq!(store.invoices()[0].id, 41);
}

#[test]
fn persistence_round_trip_preserves_elements_and_order() {
    let (mut store, snapshots) = store_with(&[]);
    store.create_invoice(invoice(1, "Northwind")).unwrap();
    store.create_invoice(invoice(2, "Contoso")).unwrap();
    store.create_invoice(invoice(3, "Fabrikam")).unwrap();
    store.delete_invoice(2).unwrap();
    store.update_invoice(invoice(3, "Fabrikam Inc")).unwrap();

    let reopened = InvoiceStore::open(snapshots, SeedData::empty()).unwrap();
    assert_eq!(reopened.invoices(), store.invoices());
}

#[test]
fn update_is_targeted_and_position_preserving() {
    let (mut store, _) = store_with(&[1, 2, 3]);
    let before: Vec<Invoice> = store.invoices().to_vec();

    store.update_invoice(invoice(2, "Contoso")).unwrap();

    assert_eq!(store.invoices()[0], before[0]);
    assert_eq!(store.invoices()[2], before[2]);
    assert_eq!(store.invoices()[1].id, 2);
    assert_eq!(
        store.invoices()[1].details.get("client"),
        Some(&json!("Contoso"))
    );
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let (mut store, snapshots) = store_with(&[1, 2]);
    let before: Vec<Invoice> = store.invoices().to_vec();

    store.update_invoice(invoice(9, "Ghost")).unwrap();

    assert_eq!(store.invoices(), before.as_slice());
    // The snapshot is still rewritten, unchanged.
    let raw = snapshots.get("invoices").unwrap().unwrap();
    let persisted: Vec<Invoice> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, before);
}

#[test]
fn delete_is_targeted_and_order_preserving() {
    let (mut store, _) = store_with(&[1, 2, 3, 4]);

    store.delete_invoice(2).unwrap();

    let ids: Vec<u64> = store.invoices().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn delete_of_missing_id_is_a_noop() {
    let (mut store, _) = store_with(&[1, 2]);
    let before: Vec<Invoice> = store.invoices().to_vec();

    store.delete_invoice(9).unwrap();

    assert_eq!(store.invoices(), before.as_slice());
}

#[test]
fn next_ids_derivation_examples() {
    let (store, _) = store_with(&[1, 2, 3]);
    let next = store.next_invoice_ids().unwrap();
    assert_eq!(next.id, 4);
    assert_eq!(next.invoice_number, "ORS-004");

    let (store, _) = store_with(&[1, 99]);
    let next = store.next_invoice_ids().unwrap();
    assert_eq!(next.id, 100);
    assert_eq!(next.invoice_number, "ORS-100");
}

#[test]
fn next_ids_on_empty_store_is_an_error() {
    let (store, _) = store_with(&[]);
    assert!(matches!(
        store.next_invoice_ids(),
        Err(StoreError::NoInvoices)
    ));
}

#[test]
fn ids_stay_unique_under_create_delete_cycles() {
    let (mut store, _) = store_with(&[1, 2, 3]);

    store.delete_invoice(1).unwrap();
    let next = store.next_invoice_ids().unwrap();
    store.create_invoice(Invoice::new(next.id)).unwrap();
    let next = store.next_invoice_ids().unwrap();
    store.create_invoice(Invoice::new(next.id)).unwrap();

    let mut ids: Vec<u64> = store.invoices().iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.invoices().len());
}

#[test]
fn duplicate_create_leaves_memory_and_snapshot_untouched() {
    let (mut store, snapshots) = store_with(&[1]);
    let raw_before = snapshots.get("invoices").unwrap().unwrap();

    let err = store.create_invoice(invoice(1, "Dup")).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId { id: 1 }));
    assert_eq!(store.invoices().len(), 1);
    assert_eq!(snapshots.get("invoices").unwrap().unwrap(), raw_before);
}

#[test]
fn corrupt_snapshot_fails_open() {
    let snapshots = InMemorySnapshots::new();
    snapshots.put("invoices", "not json at all").unwrap();

    let err = InvoiceStore::open(snapshots, SeedData::empty()).unwrap_err();
    match err {
        StoreError::Corrupt { collection, .. } => assert_eq!(collection, "invoices"),
        other => panic!("expected Corrupt, got {}", other),
    }
}

#[test]
fn only_the_invoices_key_is_ever_written() {
    let (mut store, snapshots) = store_with(&[1]);
    store.update_invoice(invoice(1, "Northwind")).unwrap();
    store.delete_invoice(1).unwrap();

    assert!(snapshots.get("products").unwrap().is_none());
    assert!(snapshots.get("lineItems").unwrap().is_none());
    assert!(snapshots.get("invoices").unwrap().is_some());
}

#[test]
fn observers_fire_once_per_successful_mutation() {
    let (mut store, _) = store_with(&[]);
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |event| sink.lock().unwrap().push(*event));

    store.create_invoice(Invoice::new(1)).unwrap();
    store.update_invoice(invoice(1, "Northwind")).unwrap();
    store.delete_invoice(1).unwrap();
    store.create_invoice(Invoice::new(5)).unwrap();
    // Rejected mutations do not notify.
    store.create_invoice(Invoice::new(5)).unwrap_err();

    let events = events.lock().unwrap();
    assert_eq!(
        events.as_slice(),
        &[
            StoreEvent::Created { id: 1 },
            StoreEvent::Updated { id: 1 },
            StoreEvent::Deleted { id: 1 },
            StoreEvent::Created { id: 5 },
        ]
    );
}

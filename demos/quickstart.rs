//! Minimal end-to-end walkthrough of the invoice store.
//!
//! Run with: cargo run --example quickstart

use orsi::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = StoreConfig::default();
    let backend = open_backend(&config)?;
    let mut store = InvoiceStore::open(backend, SeedData::bundled()?)?;

    store.subscribe(|event| println!("event: {:?}", event));

    let next = store.next_invoice_ids()?;
    println!("creating {} (id {})", next.invoice_number, next.id);

    store.create_invoice(
        Invoice::new(next.id)
            .with_detail("client", json!("Acme Corp"))
            .with_detail("total", json!(120.0)),
    )?;

    for invoice in store.invoices() {
        println!(
            "{:>8}  {}",
            invoice.invoice_number,
            invoice
                .details
                .get("client")
                .and_then(|v| v.as_str())
                .unwrap_or("-")
        );
    }

    Ok(())
}

//! Snapshot storage backends
//!
//! The store persists each collection as a single serialized snapshot under
//! a fixed string key (`products`, `lineItems`, `invoices`). Backends only
//! need synchronous string-keyed get/put — a full snapshot is always
//! written as a blind overwrite, never merged.

use crate::config::{BackendKind, StoreConfig};
use anyhow::Result;

pub mod file;
pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;

pub use file::FileSnapshots;
pub use in_memory::InMemorySnapshots;
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbSnapshots;

/// String-keyed snapshot storage.
///
/// Implementations take `&self` for both operations; interior mutability is
/// up to the backend. `get` distinguishes "key absent" (`Ok(None)`) from a
/// backend failure — absence is how the store decides to fall back to seed
/// data.
pub trait SnapshotStore: Send + Sync {
    /// Read the snapshot stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the snapshot stored under `key`
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

impl SnapshotStore for Box<dyn SnapshotStore> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }
}

/// Open the snapshot backend selected by `config`
pub fn open_backend(config: &StoreConfig) -> Result<Box<dyn SnapshotStore>> {
    match config.backend {
        BackendKind::Memory => Ok(Box::new(InMemorySnapshots::new())),
        BackendKind::File => Ok(Box::new(FileSnapshots::open(&config.data_dir)?)),
        #[cfg(feature = "lmdb")]
        BackendKind::Lmdb => Ok(Box::new(LmdbSnapshots::open(&config.data_dir)?)),
    }
}

//! LMDB snapshot backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store — no external server required, and
//! all operations are synchronous memory-mapped I/O, which matches the
//! store's synchronous persistence contract exactly.
//!
//! Snapshots are stored as JSON strings in a single named database
//! (`snapshots`), keyed by collection name.
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use crate::storage::SnapshotStore;
use anyhow::Result;
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

/// LMDB-backed snapshot storage
#[derive(Clone)]
pub struct LmdbSnapshots {
    env: Arc<Env>,
    db: Database<Str, Str>,
}

impl LmdbSnapshots {
    /// Open (or create) an LMDB environment at `path` and initialise the
    /// `snapshots` named database.
    ///
    /// The map size defaults to 16 MB — far more than three JSON snapshots
    /// will ever need, and LMDB only reserves the address space rather than
    /// allocating it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(path.as_ref())?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(16 * 1024 * 1024)
                .max_dbs(3)
                .open(path.as_ref())?
        };

        let mut wtxn = env.write_txn()?;
        let db: Database<Str, Str> = env.create_database(&mut wtxn, Some("snapshots"))?;
        wtxn.commit()?;

        tracing::debug!(dir = %path.as_ref().display(), "lmdb snapshot backend opened");

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }
}

impl SnapshotStore for LmdbSnapshots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let rtxn = self.env.read_txn()?;
        Ok(self.db.get(&rtxn, key)?.map(str::to_string))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut wtxn = self.env.write_txn()?;
        self.db.put(&mut wtxn, key, value)?;
        wtxn.commit()?;
        Ok(())
    }
}

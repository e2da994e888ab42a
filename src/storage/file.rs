//! File-backed snapshot storage
//!
//! The local-storage analogue for a desktop process: each snapshot key maps
//! to one `<key>.json` file under a data directory, written whole on every
//! put. This is the default durable backend.

use crate::storage::SnapshotStore;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot backend storing one JSON file per key
pub struct FileSnapshots {
    dir: PathBuf,
}

impl FileSnapshots {
    /// Open (or create) the data directory at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;

        tracing::debug!(dir = %dir.display(), "file snapshot backend opened");
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SnapshotStore for FileSnapshots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading snapshot {}", path.display())),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("writing snapshot {}", path.display()))
    }
}

//! In-memory snapshot backend for testing and ephemeral stores

use crate::storage::SnapshotStore;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory snapshot backend.
///
/// Useful for tests and for running the store without durability. Cloning
/// shares the underlying map, so two stores opened over clones of the same
/// backend observe each other's writes — handy for round-trip tests.
#[derive(Clone, Default)]
pub struct InMemorySnapshots {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshots {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let snapshots = InMemorySnapshots::new();
        assert!(snapshots.get("invoices").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let snapshots = InMemorySnapshots::new();
        snapshots.put("invoices", "[]").unwrap();
        assert_eq!(snapshots.get("invoices").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_put_overwrites() {
        let snapshots = InMemorySnapshots::new();
        snapshots.put("invoices", "[]").unwrap();
        snapshots.put("invoices", "[{\"id\":1}]").unwrap();
        assert_eq!(
            snapshots.get("invoices").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn test_clones_share_state() {
        let snapshots = InMemorySnapshots::new();
        let other = snapshots.clone();
        snapshots.put("products", "[]").unwrap();
        assert!(other.get("products").unwrap().is_some());
    }
}

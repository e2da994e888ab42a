//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which snapshot backend to open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Ephemeral in-memory backend (no durability)
    Memory,

    /// One JSON file per snapshot key under `data_dir`
    #[default]
    File,

    /// Embedded LMDB environment under `data_dir`
    #[cfg(feature = "lmdb")]
    Lmdb,
}

/// Configuration for opening an invoice store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding persisted snapshots (file and LMDB backends)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Snapshot backend selection
    #[serde(default)]
    pub backend: BackendKind,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("orsi-data")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: BackendKind::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

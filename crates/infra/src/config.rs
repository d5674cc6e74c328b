//! Store configuration.

use std::path::PathBuf;

/// File used when no path is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Where the inventory is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

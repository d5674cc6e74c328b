use std::path::PathBuf;

use larder_inventory::Inventory;
use thiserror::Error;

/// Persistence operation error.
///
/// These are **infrastructure errors** (file IO, encoding) as opposed to
/// domain errors (validation). The store recovers from all of them locally:
/// read failures fall back to an empty inventory, write failures keep the
/// in-memory state and are logged.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The inventory file exists but could not be read.
    #[error("failed to read inventory file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory file was read but its content is not a valid inventory.
    #[error("inventory file {} is corrupt: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The inventory file could not be overwritten.
    #[error("failed to write inventory file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory could not be encoded.
    #[error("failed to encode inventory: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PersistenceError {
    /// True for failures that happen while loading (`PersistenceReadFailure`).
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    /// True for failures that happen while saving (`PersistenceWriteFailure`).
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Serialize(_))
    }
}

/// Whole-inventory persistence boundary.
///
/// Implementations store a complete snapshot on every `save` (no incremental
/// writes) and hand back the last snapshot on `load`.
pub trait InventoryRepository {
    /// Load the persisted inventory.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<Inventory>, PersistenceError>;

    /// Replace the persisted inventory with `inventory`.
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError>;
}

impl<R> InventoryRepository for &R
where
    R: InventoryRepository + ?Sized,
{
    fn load(&self) -> Result<Option<Inventory>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        (**self).save(inventory)
    }
}

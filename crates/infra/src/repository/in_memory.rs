use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use larder_inventory::Inventory;

use super::record;
use super::r#trait::{InventoryRepository, PersistenceError};

/// In-memory inventory repository.
///
/// Intended for tests/dev. Snapshots go through the same JSON encoding as the
/// file backend, and every save attempt is counted so callers can assert on
/// persistence behavior.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    snapshot: RwLock<Option<String>>,
    save_attempts: RwLock<usize>,
    fail_writes: bool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw persisted text (which may be corrupt).
    pub fn with_snapshot(text: impl Into<String>) -> Self {
        Self {
            snapshot: RwLock::new(Some(text.into())),
            ..Self::default()
        }
    }

    /// A repository whose saves always fail.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Raw text of the last successful save (or the initial snapshot).
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.read().ok().and_then(|s| s.clone())
    }

    /// Number of times `save` was called, successful or not.
    pub fn save_attempts(&self) -> usize {
        self.save_attempts.read().map(|n| *n).unwrap_or(0)
    }
}

fn memory_path() -> PathBuf {
    PathBuf::from("<memory>")
}

fn poisoned() -> io::Error {
    io::Error::other("snapshot lock poisoned")
}

impl InventoryRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<Inventory>, PersistenceError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| PersistenceError::Read {
                path: memory_path(),
                source: poisoned(),
            })?;

        match guard.as_deref() {
            None => Ok(None),
            Some(text) => record::decode(text)
                .map(Some)
                .map_err(|source| PersistenceError::Parse {
                    path: memory_path(),
                    source,
                }),
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        if let Ok(mut n) = self.save_attempts.write() {
            *n += 1;
        }

        if self.fail_writes {
            return Err(PersistenceError::Write {
                path: memory_path(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }

        let json = record::encode(inventory).map_err(PersistenceError::Serialize)?;
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| PersistenceError::Write {
                path: memory_path(),
                source: poisoned(),
            })?;
        *guard = Some(json);
        Ok(())
    }
}

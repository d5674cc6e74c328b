use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use larder_inventory::Inventory;

use super::record;
use super::r#trait::{InventoryRepository, PersistenceError};

/// Inventory persisted as a single pretty-printed JSON file.
///
/// Every save overwrites the whole file. No locking is performed, so two
/// processes sharing a path can lose each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<Inventory>, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let inventory = record::decode(&text).map_err(|source| PersistenceError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(inventory))
    }

    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let json = record::encode(inventory).map_err(PersistenceError::Serialize)?;
        fs::write(&self.path, json).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

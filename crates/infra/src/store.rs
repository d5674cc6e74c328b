//! Inventory store: the single owner of the in-memory inventory.
//!
//! Every mutation is a synchronous read-modify-persist sequence: validate,
//! apply to the in-memory [`Inventory`], then write the whole inventory back
//! through the repository. Persistence failures are logged and recovered
//! here; they never turn a completed mutation into an error.

use std::path::Path;

use larder_core::{DomainError, DomainResult, ExpirationDate, ItemName, Quantity};
use larder_inventory::{AddOutcome, Inventory, InventoryItem, RemoveOutcome};

use crate::config::StoreConfig;
use crate::repository::{InventoryRepository, JsonFileRepository};

/// Result of a save attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The write failed; in-memory and persisted state may now differ.
    Failed,
}

/// Load the persisted inventory, falling back to an empty one.
///
/// A missing file is the normal first-run case. An unreadable or corrupt file
/// is reported and left on disk untouched.
pub fn load_inventory<R: InventoryRepository + ?Sized>(repository: &R) -> Inventory {
    match repository.load() {
        Ok(Some(inventory)) => {
            tracing::info!(entries = inventory.len(), "loaded inventory");
            inventory
        }
        Ok(None) => {
            tracing::info!("no saved inventory found; starting empty");
            Inventory::new()
        }
        Err(err) => {
            tracing::warn!("could not load inventory, starting empty: {err}");
            Inventory::new()
        }
    }
}

/// Persist `inventory`, reporting (not propagating) failures.
pub fn save_inventory<R: InventoryRepository + ?Sized>(
    repository: &R,
    inventory: &Inventory,
) -> SaveOutcome {
    match repository.save(inventory) {
        Ok(()) => {
            tracing::debug!(entries = inventory.len(), "saved inventory");
            SaveOutcome::Saved
        }
        Err(err) => {
            tracing::error!("could not save inventory: {err}");
            SaveOutcome::Failed
        }
    }
}

/// Owner of the inventory and its persistence.
#[derive(Debug)]
pub struct InventoryStore<R = JsonFileRepository> {
    repository: R,
    inventory: Inventory,
    last_save: Option<SaveOutcome>,
}

impl InventoryStore<JsonFileRepository> {
    /// Open the JSON file named by `config`, loading whatever it holds.
    pub fn open(config: &StoreConfig) -> Self {
        Self::with_repository(JsonFileRepository::new(config.path.clone()))
    }

    pub fn path(&self) -> &Path {
        self.repository.path()
    }
}

impl<R: InventoryRepository> InventoryStore<R> {
    pub fn with_repository(repository: R) -> Self {
        let inventory = load_inventory(&repository);
        Self {
            repository,
            inventory,
            last_save: None,
        }
    }

    /// Current in-memory snapshot. Readers must not hold it across a mutation.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.inventory.get(name)
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Outcome of the most recent save attempt, if any.
    pub fn last_save(&self) -> Option<SaveOutcome> {
        self.last_save
    }

    /// Re-read the persisted inventory without touching in-memory state.
    pub fn load(&self) -> Inventory {
        load_inventory(&self.repository)
    }

    /// Write the in-memory inventory, overwriting the persisted copy.
    pub fn save(&mut self) -> SaveOutcome {
        let outcome = save_inventory(&self.repository, &self.inventory);
        self.last_save = Some(outcome);
        outcome
    }

    /// Add `quantity` units of `name`, persisting on success.
    ///
    /// `expiration` must be `YYYY-MM-DD`. It only applies when `name` is new;
    /// restocking an existing item keeps its stored date. Validation failures
    /// leave both memory and disk untouched.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity: i64,
        expiration: &str,
    ) -> DomainResult<AddOutcome> {
        let expiration_date = ExpirationDate::parse(expiration)?;
        let name = ItemName::new(name)?;
        let quantity = Quantity::new(quantity)?;

        let outcome = self.inventory.add(name.clone(), quantity, expiration_date)?;
        match &outcome {
            AddOutcome::Created { quantity } => {
                tracing::info!(item = %name, %quantity, "added new item");
            }
            AddOutcome::Restocked { quantity, .. } => {
                tracing::info!(item = %name, total = %quantity, "restocked item");
            }
        }

        self.save();
        Ok(outcome)
    }

    /// Take `quantity` units of `name`.
    ///
    /// An unknown item is `ItemNotFound` and a zero or negative `quantity` is
    /// `InvalidQuantity`; neither saves. Otherwise a save is attempted
    /// whatever the outcome, including `InsufficientQuantity` where the
    /// unchanged inventory is written back.
    pub fn remove_item(&mut self, name: &str, quantity: i64) -> DomainResult<RemoveOutcome> {
        if !self.inventory.contains(name) {
            return Err(DomainError::not_found(name));
        }
        let quantity = Quantity::new(quantity)?;

        let result = self.inventory.remove(name, quantity);
        match &result {
            Ok(RemoveOutcome::Decremented { remaining }) => {
                tracing::info!(item = name, %remaining, "removed units");
            }
            Ok(RemoveOutcome::Removed) => {
                tracing::info!(item = name, "removed item");
            }
            Err(err) => {
                tracing::info!(item = name, "remove rejected: {err}");
            }
        }

        self.save();
        result
    }
}

//! Infrastructure layer: file persistence, configuration and the inventory
//! store that ties domain rules to persistence.

pub mod config;
pub mod repository;
pub mod store;

pub use config::{DEFAULT_INVENTORY_FILE, StoreConfig};
pub use repository::{InMemoryRepository, InventoryRepository, JsonFileRepository, PersistenceError};
pub use store::{InventoryStore, SaveOutcome, load_inventory, save_inventory};

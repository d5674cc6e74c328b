//! Inventory persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for loading and
//! saving the whole inventory, plus a JSON file backend and an in-memory
//! backend for tests.

pub mod in_memory;
pub mod json_file;
pub mod record;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;
pub use r#trait::{InventoryRepository, PersistenceError};

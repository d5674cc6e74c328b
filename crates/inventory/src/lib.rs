//! Inventory domain module.
//!
//! This crate contains the business rules for the household inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Persistence lives in `larder-infra`.

pub mod expiration;
pub mod inventory;
pub mod item;

pub use expiration::{ExpirationStatus, ExpiredItem, check_expired};
pub use inventory::{AddOutcome, Inventory, RemoveOutcome};
pub use item::InventoryItem;

//! `larder-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no persistence):
//! validated item names, quantities and expiration dates, plus the error
//! taxonomy shared by the inventory and recipe crates.

pub mod date;
pub mod entity;
pub mod error;
pub mod name;
pub mod quantity;

pub use date::{DATE_FORMAT, ExpirationDate};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use name::ItemName;
pub use quantity::Quantity;

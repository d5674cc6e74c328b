//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures raised by inventory
/// operations. Persistence failures are recovered in the infra layer and never
/// surface through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Expiration date text did not match `YYYY-MM-DD`.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Remove was requested for an item that is not in the inventory.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Remove asked for more than is currently held.
    #[error("insufficient quantity of {name}: requested {requested}, available {available}")]
    InsufficientQuantity {
        name: String,
        requested: u32,
        available: u32,
    },

    /// Quantity was zero, negative, or out of range.
    #[error("invalid quantity: {0} (must be a positive whole number)")]
    InvalidQuantity(i64),

    /// Item name was empty or whitespace only.
    #[error("item name cannot be empty")]
    InvalidItemName,
}

impl DomainError {
    pub fn invalid_date(text: impl Into<String>) -> Self {
        Self::InvalidDateFormat(text.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound(name.into())
    }

    pub fn insufficient(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            requested,
            available,
        }
    }
}

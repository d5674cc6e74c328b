//! Expiration checker: a read-only view over an [`Inventory`] snapshot.

use chrono::NaiveDate;
use larder_core::{ExpirationDate, ItemName};

use crate::inventory::Inventory;

/// An inventory entry whose expiration date has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiredItem {
    pub name: ItemName,
    pub expiration_date: ExpirationDate,
}

/// Freshness of a single date relative to a reference day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpirationStatus {
    Expired,
    Fresh,
}

impl ExpirationStatus {
    /// An item dated on `as_of` itself is still fresh.
    pub fn classify(date: ExpirationDate, as_of: NaiveDate) -> Self {
        if date.is_before(as_of) {
            ExpirationStatus::Expired
        } else {
            ExpirationStatus::Fresh
        }
    }
}

/// Every entry dated strictly before `as_of`, in inventory iteration order.
///
/// An empty result means nothing has expired.
pub fn check_expired(inventory: &Inventory, as_of: NaiveDate) -> Vec<ExpiredItem> {
    inventory
        .iter()
        .filter(|item| {
            ExpirationStatus::classify(item.expiration_date(), as_of) == ExpirationStatus::Expired
        })
        .map(|item| ExpiredItem {
            name: item.name().clone(),
            expiration_date: item.expiration_date(),
        })
        .collect()
}

//! On-disk representation of the inventory.
//!
//! The file is a JSON object keyed by item name:
//!
//! ```json
//! { "Milk": { "quantity": 2, "expiration_date": "2025-05-01" } }
//! ```
//!
//! There is no schema version. Unknown fields are ignored; missing fields,
//! wrong types, zero quantities and malformed dates are parse errors.

use std::collections::BTreeMap;

use larder_core::{ExpirationDate, ItemName, Quantity};
use larder_inventory::{Inventory, InventoryItem};
use serde::{Deserialize, Serialize};

/// One persisted entry (the name is the enclosing map key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub quantity: Quantity,
    pub expiration_date: ExpirationDate,
}

/// Whole-file document.
pub type InventoryDocument = BTreeMap<ItemName, ItemRecord>;

pub fn to_document(inventory: &Inventory) -> InventoryDocument {
    inventory
        .iter()
        .map(|item| {
            (
                item.name().clone(),
                ItemRecord {
                    quantity: item.quantity(),
                    expiration_date: item.expiration_date(),
                },
            )
        })
        .collect()
}

pub fn from_document(document: InventoryDocument) -> Inventory {
    document
        .into_iter()
        .map(|(name, record)| InventoryItem::new(name, record.quantity, record.expiration_date))
        .collect()
}

pub fn encode(inventory: &Inventory) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_document(inventory))
}

pub fn decode(text: &str) -> Result<Inventory, serde_json::Error> {
    serde_json::from_str::<InventoryDocument>(text).map(from_document)
}

//! The inventory mapping and its add/remove rules.

use std::collections::BTreeMap;

use larder_core::{DomainError, DomainResult, Entity, ExpirationDate, ItemName, Quantity};

use crate::item::InventoryItem;

/// Mapping from item name to item.
///
/// Every entry holds at least one unit and a valid date; the only way in is
/// through [`Inventory::add`] or [`FromIterator`], both of which take
/// already-validated values. Iteration is ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<ItemName, InventoryItem>,
}

/// What `add` did to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was created.
    Created { quantity: Quantity },
    /// An existing entry was topped up; its expiration date was kept.
    Restocked {
        quantity: Quantity,
        expiration_date: ExpirationDate,
    },
}

/// What `remove` did to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Some units remain.
    Decremented { remaining: Quantity },
    /// The last units were taken and the entry was deleted.
    Removed,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &ItemName> {
        self.items.keys()
    }

    /// Add `quantity` units of `name`.
    ///
    /// An existing entry is incremented and keeps its stored expiration date;
    /// `expiration_date` is only used when the entry is created.
    pub fn add(
        &mut self,
        name: ItemName,
        quantity: Quantity,
        expiration_date: ExpirationDate,
    ) -> DomainResult<AddOutcome> {
        if let Some(item) = self.items.get_mut(name.as_str()) {
            let total = item.quantity().checked_add(quantity)?;
            item.set_quantity(total);
            return Ok(AddOutcome::Restocked {
                quantity: total,
                expiration_date: item.expiration_date(),
            });
        }

        self.items.insert(
            name.clone(),
            InventoryItem::new(name, quantity, expiration_date),
        );
        Ok(AddOutcome::Created { quantity })
    }

    /// Take `quantity` units of `name`.
    ///
    /// Taking exactly what is held deletes the entry. Asking for more than is
    /// held fails with `InsufficientQuantity` and leaves the entry untouched.
    pub fn remove(&mut self, name: &str, quantity: Quantity) -> DomainResult<RemoveOutcome> {
        let item = self
            .items
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(name))?;

        let available = item.quantity();
        if quantity > available {
            return Err(DomainError::insufficient(
                name,
                quantity.get(),
                available.get(),
            ));
        }

        match available.saturating_remainder(quantity) {
            Some(remaining) => {
                item.set_quantity(remaining);
                Ok(RemoveOutcome::Decremented { remaining })
            }
            None => {
                self.items.remove(name);
                Ok(RemoveOutcome::Removed)
            }
        }
    }
}

impl FromIterator<InventoryItem> for Inventory {
    /// Later duplicates of a name replace earlier ones.
    fn from_iter<T: IntoIterator<Item = InventoryItem>>(iter: T) -> Self {
        let items = iter
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = std::collections::btree_map::Values<'a, ItemName, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

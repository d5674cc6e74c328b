use larder_core::{Entity, ExpirationDate, ItemName, Quantity};

/// Entity: one line of the household inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    name: ItemName,
    quantity: Quantity,
    expiration_date: ExpirationDate,
}

impl InventoryItem {
    pub fn new(name: ItemName, quantity: Quantity, expiration_date: ExpirationDate) -> Self {
        Self {
            name,
            quantity,
            expiration_date,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn expiration_date(&self) -> ExpirationDate {
        self.expiration_date
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl Entity for InventoryItem {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

use crate::error::{CoreError, CoreResult};
use crate::item::Item;

/// The items the player carries, in pickup order, bounded at
/// [`Inventory::CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Maximum number of items the player can carry at once.
    pub const CAPACITY: usize = 7;

    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory already holding one item (the starting loadout).
    pub fn carrying(item: Item) -> Self {
        Self { items: vec![item] }
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when no further item fits.
    pub fn is_full(&self) -> bool {
        self.items.len() >= Self::CAPACITY
    }

    /// Iterate over held items in pickup order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Add an item, rejecting it when the inventory is at capacity.
    pub fn add(&mut self, item: Item) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::InventoryFull {
                capacity: Self::CAPACITY,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// The held item at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Look up a held item by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// True when an item with the given name is held.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove and return the first held item matching the given name.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.matches(name))?;
        Some(self.items.remove(index))
    }

    /// Remove and return the held item at a zero-based position.
    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

//! Item catalog in natural (insertion) order with id lookup.

use std::collections::HashMap;

use tome_core::errors::CatalogError;
use tome_core::models::{Item, ItemId};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    positions: HashMap<ItemId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of items, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, item: Item) -> Result<(), CatalogError> {
        if self.positions.contains_key(&item.id) {
            return Err(CatalogError::DuplicateItem { id: item.id });
        }
        self.positions.insert(item.id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Allocate the next id and append a new item under it.
    pub fn add(
        &mut self,
        floor: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Result<ItemId, CatalogError> {
        let id = self.next_id(floor).ok_or_else(|| CatalogError::ItemIdsExhausted {
            max: self.max_id().unwrap_or(floor),
        })?;
        self.positions.insert(id, self.items.len());
        self.items.push(Item::new(id, title, author, genre));
        Ok(id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.positions.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Items in natural order: initialization order, then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Next id strictly above the current maximum, or `floor + 1` when empty.
    /// `None` once the id space is used up.
    pub fn next_id(&self, floor: ItemId) -> Option<ItemId> {
        self.max_id().unwrap_or(floor).max(floor).checked_add(1)
    }

    fn max_id(&self) -> Option<ItemId> {
        self.positions.keys().copied().max()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

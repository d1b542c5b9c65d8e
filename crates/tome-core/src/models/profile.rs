use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Stable profile identifier.
pub type ProfileId = u64;

/// A registered customer and their append-only purchase history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    /// Owned item ids. Ordered so that every traversal is reproducible.
    #[serde(default)]
    pub purchases: BTreeSet<ItemId>,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            purchases: BTreeSet::new(),
        }
    }

    /// Builder-style helper for seeding a purchase history.
    pub fn with_purchases(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.purchases.extend(items);
        self
    }

    /// Record a purchase. Returns `true` if the item was not owned before.
    pub fn add_purchase(&mut self, item_id: ItemId) -> bool {
        self.purchases.insert(item_id)
    }

    pub fn owns(&self, item_id: ItemId) -> bool {
        self.purchases.contains(&item_id)
    }

    pub fn has_history(&self) -> bool {
        !self.purchases.is_empty()
    }
}

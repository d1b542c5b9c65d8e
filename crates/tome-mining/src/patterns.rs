use std::collections::BTreeMap;

use tome_core::models::ItemId;

static NO_PATTERNS: BTreeMap<ItemId, u64> = BTreeMap::new();

/// Mined "bought X, tends to also buy Y" weights, keyed by X.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentPatterns {
    bases: BTreeMap<ItemId, BTreeMap<ItemId, u64>>,
}

impl FrequentPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, item: ItemId, base: BTreeMap<ItemId, u64>) {
        if !base.is_empty() {
            self.bases.insert(item, base);
        }
    }

    /// Conditional pattern base of `item`: related item → weighted count.
    /// Empty for infrequent or unknown items.
    pub fn related(&self, item: ItemId) -> &BTreeMap<ItemId, u64> {
        self.bases.get(&item).unwrap_or(&NO_PATTERNS)
    }

    /// Number of items with a non-empty pattern base.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

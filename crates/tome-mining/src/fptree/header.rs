//! Header table: item → global support and the head of its same-item chain.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tome_core::models::ItemId;

use super::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Number of transactions containing the item.
    pub support: u64,
    /// First node carrying the item.
    pub head: Option<NodeId>,
    /// Last node in the chain, so appending a link is O(1).
    pub tail: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    entries: BTreeMap<ItemId, HeaderEntry>,
}

impl HeaderTable {
    /// Keep only items whose support meets `min_support`.
    pub fn from_supports(supports: BTreeMap<ItemId, u64>, min_support: u64) -> Self {
        let entries = supports
            .into_iter()
            .filter(|&(_, support)| support >= min_support)
            .map(|(item, support)| {
                (
                    item,
                    HeaderEntry {
                        support,
                        head: None,
                        tail: None,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, item: ItemId) -> Option<&HeaderEntry> {
        self.entries.get(&item)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.entries.contains_key(&item)
    }

    pub fn support(&self, item: ItemId) -> u64 {
        self.entries.get(&item).map_or(0, |e| e.support)
    }

    /// Record `node` as the newest occurrence of `item`. Returns the previous
    /// tail, which the caller must link forward to `node`.
    pub(crate) fn append(&mut self, item: ItemId, node: NodeId) -> Option<NodeId> {
        let entry = self.entries.get_mut(&item)?;
        let previous = entry.tail.replace(node);
        if entry.head.is_none() {
            entry.head = Some(node);
        }
        previous
    }

    /// Insertion order: descending support, ties by ascending item id.
    pub fn compare_for_insertion(&self, a: ItemId, b: ItemId) -> Ordering {
        self.support(b)
            .cmp(&self.support(a))
            .then_with(|| a.cmp(&b))
    }

    /// Mining order: ascending support (rarest first), ties by ascending id.
    pub fn mining_order(&self) -> Vec<ItemId> {
        let mut items: Vec<ItemId> = self.entries.keys().copied().collect();
        items.sort_by(|&a, &b| self.support(a).cmp(&self.support(b)).then_with(|| a.cmp(&b)));
        items
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

use std::collections::{BTreeMap, BTreeSet};

use tome_core::models::ItemId;

use super::{FpNode, HeaderTable, NodeId};

/// Compressed prefix tree over purchase transactions.
#[derive(Debug, Clone)]
pub struct FpTree {
    nodes: Vec<FpNode>,
    header: HeaderTable,
}

impl Default for FpTree {
    fn default() -> Self {
        Self {
            nodes: vec![FpNode::root()],
            header: HeaderTable::default(),
        }
    }
}

impl FpTree {
    /// Build the tree in two passes: count supports, then insert every
    /// transaction filtered to frequent items and ordered by descending support.
    pub fn build<'a, I>(transactions: I, min_support: u64) -> Self
    where
        I: IntoIterator<Item = &'a BTreeSet<ItemId>>,
        I::IntoIter: Clone,
    {
        let transactions = transactions.into_iter();

        let mut supports: BTreeMap<ItemId, u64> = BTreeMap::new();
        for transaction in transactions.clone() {
            for &item in transaction {
                *supports.entry(item).or_insert(0) += 1;
            }
        }

        let mut tree = Self {
            nodes: vec![FpNode::root()],
            header: HeaderTable::from_supports(supports, min_support),
        };
        for transaction in transactions {
            tree.insert_transaction(transaction);
        }
        tree
    }

    /// Insert one transaction. Items missing from the header table are ignored.
    pub fn insert_transaction(&mut self, transaction: &BTreeSet<ItemId>) {
        let mut ordered: Vec<ItemId> = transaction
            .iter()
            .copied()
            .filter(|&item| self.header.contains(item))
            .collect();
        ordered.sort_by(|&a, &b| self.header.compare_for_insertion(a, b));

        let mut current = NodeId::ROOT;
        for item in ordered {
            let next = match self.nodes[current.0].children.get(&item) {
                Some(&child) => child,
                None => self.push_child(current, item),
            };
            self.nodes[next.0].count += 1;
            current = next;
        }
    }

    fn push_child(&mut self, parent: NodeId, item: ItemId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FpNode::new(item, parent));
        self.nodes[parent.0].children.insert(item, id);
        if let Some(previous) = self.header.append(item, id) {
            self.nodes[previous.0].link = Some(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &FpNode {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> &FpNode {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn header(&self) -> &HeaderTable {
        &self.header
    }

    /// Every node carrying `item`, following the same-item link chain.
    pub fn occurrences(&self, item: ItemId) -> impl Iterator<Item = NodeId> + '_ {
        let head = self.header.get(item).and_then(|entry| entry.head);
        std::iter::successors(head, move |id| self.nodes[id.0].link)
    }

    /// Item labels from `id`'s parent up to (excluding) the root.
    pub fn prefix_path(&self, id: NodeId) -> Vec<ItemId> {
        let mut path = Vec::new();
        let mut cursor = self.nodes[id.0].parent;
        while let Some(parent) = cursor {
            let node = &self.nodes[parent.0];
            match node.item {
                Some(item) => path.push(item),
                None => break,
            }
            cursor = node.parent;
        }
        path
    }

    /// Weighted items on the paths leading to every occurrence of `item`.
    /// Each prefix item is weighted by the occurrence node's count.
    pub fn conditional_pattern_base(&self, item: ItemId) -> BTreeMap<ItemId, u64> {
        let mut base: BTreeMap<ItemId, u64> = BTreeMap::new();
        for occurrence in self.occurrences(item) {
            let weight = self.nodes[occurrence.0].count;
            for prefix_item in self.prefix_path(occurrence) {
                *base.entry(prefix_item).or_insert(0) += weight;
            }
        }
        base
    }

    /// Number of nodes, excluding the root sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node and header entry. No links survive.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = FpNode::root();
        self.header.clear();
    }
}

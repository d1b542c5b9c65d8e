use std::collections::BTreeMap;

use tome_core::models::ItemId;

/// Index of a node inside the [`FpTree`](super::FpTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root sentinel always occupies slot 0.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// One prefix-tree node.
#[derive(Debug, Clone)]
pub struct FpNode {
    /// `None` only for the root sentinel.
    pub item: Option<ItemId>,
    /// Number of transactions whose ordered prefix passes through this node.
    pub count: u64,
    pub parent: Option<NodeId>,
    pub children: BTreeMap<ItemId, NodeId>,
    /// Next node elsewhere in the tree carrying the same item.
    pub link: Option<NodeId>,
}

impl FpNode {
    pub(crate) fn root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
            link: None,
        }
    }

    pub(crate) fn new(item: ItemId, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 0,
            parent: Some(parent),
            children: BTreeMap::new(),
            link: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

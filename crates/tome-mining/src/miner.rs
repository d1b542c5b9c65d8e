//! FP-Growth miner restricted to single-item conditional pattern bases.

use std::collections::BTreeSet;

use tome_core::constants::MIN_SUPPORT_FLOOR;
use tome_core::errors::MiningError;
use tome_core::models::{ItemId, Profile};
use tracing::debug;

use crate::fptree::FpTree;
use crate::patterns::FrequentPatterns;

#[derive(Debug, Clone, Copy)]
pub struct FpGrowthMiner {
    min_support: u64,
}

impl FpGrowthMiner {
    pub fn new(min_support: u64) -> Result<Self, MiningError> {
        if min_support < MIN_SUPPORT_FLOOR {
            return Err(MiningError::InvalidMinSupport { min_support });
        }
        Ok(Self { min_support })
    }

    pub fn min_support(&self) -> u64 {
        self.min_support
    }

    /// Flatten every profile's purchases into a transaction and mine them.
    pub fn mine_profiles<'a>(
        &self,
        profiles: impl IntoIterator<Item = &'a Profile>,
    ) -> FrequentPatterns {
        let transactions: Vec<&BTreeSet<ItemId>> =
            profiles.into_iter().map(|p| &p.purchases).collect();
        self.mine(transactions.iter().copied())
    }

    /// Build the prefix tree and extract each frequent item's conditional
    /// pattern base, rarest items first.
    pub fn mine<'a, I>(&self, transactions: I) -> FrequentPatterns
    where
        I: IntoIterator<Item = &'a BTreeSet<ItemId>>,
        I::IntoIter: Clone,
    {
        let tree = FpTree::build(transactions, self.min_support);
        let mut patterns = FrequentPatterns::new();
        for item in tree.header().mining_order() {
            patterns.insert(item, tree.conditional_pattern_base(item));
        }
        debug!(
            nodes = tree.len(),
            frequent_items = tree.header().len(),
            items_with_patterns = patterns.len(),
            min_support = self.min_support,
            "frequent patterns mined"
        );
        patterns
    }
}

impl Default for FpGrowthMiner {
    fn default() -> Self {
        Self {
            min_support: MIN_SUPPORT_FLOOR,
        }
    }
}

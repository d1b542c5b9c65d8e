//! Item co-occurrence (market-basket) model.
//!
//! For every unordered pair (i, j), i ≠ j, the model holds the number of
//! profiles whose purchase set contains both. Each pair is stored as two
//! directed entries so either side can be looked up directly.
//!
//! ## Maintenance tradeoff
//!
//! [`CooccurrenceModel::rebuild_for_profile`] adds one to *every* pair in the
//! given set. Calling it again for the same profile after a purchase counts
//! the profile's older pairs twice, so it is only sound inside a full
//! recount ([`CooccurrenceModel::build`]), which is correct but costs
//! O(Σ|purchases|²) on every purchase.
//!
//! [`CooccurrenceModel::record_purchase`] applies the exact delta instead:
//! a purchase of `x` by a profile that previously owned `S` (x ∉ S) creates
//! exactly the pairs {x, s} for s ∈ S. Because purchases are never retracted
//! this keeps the model identical to a full recount at O(|S|) cost.

use std::collections::{BTreeMap, BTreeSet};

use tome_core::models::{ItemId, Profile};

static NO_PARTNERS: BTreeMap<ItemId, u64> = BTreeMap::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceModel {
    pairs: BTreeMap<ItemId, BTreeMap<ItemId, u64>>,
}

impl CooccurrenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full recount across all profiles.
    pub fn build<'a>(profiles: impl IntoIterator<Item = &'a Profile>) -> Self {
        let mut model = Self::new();
        for profile in profiles {
            model.rebuild_for_profile(&profile.purchases);
        }
        model
    }

    /// Add one co-purchase for every unordered pair within `purchases`, in
    /// both directions. Only valid once per profile per recount.
    pub fn rebuild_for_profile(&mut self, purchases: &BTreeSet<ItemId>) {
        for (pos, &a) in purchases.iter().enumerate() {
            for &b in purchases.iter().skip(pos + 1) {
                self.bump(a, b);
            }
        }
    }

    /// Apply the pairs created when a profile owning `prior` buys `new_item`.
    ///
    /// `prior` is the purchase set *before* the purchase. A no-op when the
    /// item was already owned.
    pub fn record_purchase(&mut self, prior: &BTreeSet<ItemId>, new_item: ItemId) {
        if prior.contains(&new_item) {
            return;
        }
        for &owned in prior {
            self.bump(owned, new_item);
        }
    }

    /// Partner item → co-purchase count. Empty if the item has no partners.
    pub fn cooccurs_with(&self, item_id: ItemId) -> &BTreeMap<ItemId, u64> {
        self.pairs.get(&item_id).unwrap_or(&NO_PARTNERS)
    }

    /// Co-purchase count of the unordered pair {a, b}.
    pub fn count(&self, a: ItemId, b: ItemId) -> u64 {
        self.cooccurs_with(a).get(&b).copied().unwrap_or(0)
    }

    /// Number of items with at least one partner.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    fn bump(&mut self, a: ItemId, b: ItemId) {
        if a == b {
            return;
        }
        *self.pairs.entry(a).or_default().entry(b).or_insert(0) += 1;
        *self.pairs.entry(b).or_default().entry(a).or_insert(0) += 1;
    }
}

//! Inverted purchase index: item id → ids of the profiles that bought it.
//!
//! Built once from the profile store at load, then updated in place on every
//! purchase. Purchase history is append-only so there is no removal.

use std::collections::{BTreeMap, BTreeSet};

use tome_core::models::{ItemId, Profile, ProfileId};

static NO_SUBSCRIBERS: BTreeSet<ProfileId> = BTreeSet::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    subscribers: BTreeMap<ItemId, BTreeSet<ProfileId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cold-load construction from every profile's purchase set.
    pub fn build<'a>(profiles: impl IntoIterator<Item = &'a Profile>) -> Self {
        let mut index = Self::new();
        for profile in profiles {
            for &item_id in &profile.purchases {
                index.record(profile.id, item_id);
            }
        }
        index
    }

    /// Add `profile_id` to the subscriber set of `item_id`, creating the set
    /// if absent. Returns `true` if the pair was new.
    pub fn record(&mut self, profile_id: ProfileId, item_id: ItemId) -> bool {
        self.subscribers
            .entry(item_id)
            .or_default()
            .insert(profile_id)
    }

    /// Profiles that purchased `item_id`. Empty for an unknown item.
    pub fn subscribers(&self, item_id: ItemId) -> &BTreeSet<ProfileId> {
        self.subscribers.get(&item_id).unwrap_or(&NO_SUBSCRIBERS)
    }

    /// Global purchase count for `item_id`.
    pub fn purchase_count(&self, item_id: ItemId) -> usize {
        self.subscribers(item_id).len()
    }

    /// Union of the subscribers of every item in `items`.
    pub fn co_subscribers<'a>(
        &self,
        items: impl IntoIterator<Item = &'a ItemId>,
    ) -> BTreeSet<ProfileId> {
        items
            .into_iter()
            .flat_map(|item_id| self.subscribers(*item_id).iter().copied())
            .collect()
    }

    /// Indexed items with their subscriber sets, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &BTreeSet<ProfileId>)> {
        self.subscribers.iter().map(|(id, subs)| (*id, subs))
    }

    /// Number of distinct items with at least one purchase.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

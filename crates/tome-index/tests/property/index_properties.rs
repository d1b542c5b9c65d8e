//! Property tests for tome-index: similarity bounds, index consistency,
//! co-occurrence symmetry.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tome_core::models::Profile;
use tome_index::{jaccard, CooccurrenceModel, InvertedIndex};

fn item_set() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(0u64..30, 0..12)
}

/// A sequence of (profile, item) purchase events over a small id space.
fn purchase_events() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((1u64..8, 100u64..120), 0..60)
}

proptest! {
    #[test]
    fn prop_jaccard_symmetric(a in item_set(), b in item_set()) {
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn prop_jaccard_bounded(a in item_set(), b in item_set()) {
        let score = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_jaccard_self_is_one(a in item_set()) {
        if a.is_empty() {
            prop_assert_eq!(jaccard(&a, &a), 0.0);
        } else {
            prop_assert_eq!(jaccard(&a, &a), 1.0);
        }
    }
}

proptest! {
    #[test]
    fn prop_index_consistent_after_purchases(events in purchase_events()) {
        let mut profiles: Vec<Profile> = (1..8).map(|id| Profile::new(id, "p")).collect();
        let mut index = InvertedIndex::build(&profiles);

        for (profile_id, item_id) in events {
            let profile = &mut profiles[(profile_id - 1) as usize];
            profile.add_purchase(item_id);
            index.record(profile_id, item_id);
        }

        for profile in &profiles {
            for item_id in 100u64..120 {
                prop_assert_eq!(
                    profile.owns(item_id),
                    index.subscribers(item_id).contains(&profile.id)
                );
            }
        }
    }

    #[test]
    fn prop_cooccurrence_symmetric(sets in prop::collection::vec(item_set(), 0..10)) {
        let profiles: Vec<Profile> = sets
            .into_iter()
            .enumerate()
            .map(|(i, s)| Profile::new(i as u64, "p").with_purchases(s))
            .collect();
        let model = CooccurrenceModel::build(&profiles);

        for i in 0u64..30 {
            for (&j, &count) in model.cooccurs_with(i) {
                prop_assert_ne!(i, j);
                prop_assert_eq!(count, model.count(j, i));
            }
        }
    }

    #[test]
    fn prop_cooccurrence_counts_profiles_holding_both(sets in prop::collection::vec(item_set(), 0..10)) {
        let profiles: Vec<Profile> = sets
            .into_iter()
            .enumerate()
            .map(|(i, s)| Profile::new(i as u64, "p").with_purchases(s))
            .collect();
        let model = CooccurrenceModel::build(&profiles);

        for i in 0u64..30 {
            for j in 0u64..30 {
                if i == j {
                    continue;
                }
                let expected = profiles
                    .iter()
                    .filter(|p| p.owns(i) && p.owns(j))
                    .count() as u64;
                prop_assert_eq!(model.count(i, j), expected);
            }
        }
    }

    #[test]
    fn prop_incremental_delta_equals_full_recount(events in purchase_events()) {
        let mut profiles: Vec<Profile> = (1..8).map(|id| Profile::new(id, "p")).collect();
        let mut incremental = CooccurrenceModel::new();

        for (profile_id, item_id) in events {
            let profile = &mut profiles[(profile_id - 1) as usize];
            incremental.record_purchase(&profile.purchases, item_id);
            profile.add_purchase(item_id);
        }

        prop_assert_eq!(incremental, CooccurrenceModel::build(&profiles));
    }
}

//! Property tests for tome-recommend: cap, exclusion, and dedup hold for any
//! purchase history, and the derived structures track every purchase.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tome_core::config::{CooccurrencePolicy, TomeConfig};
use tome_core::models::{Item, Profile};
use tome_index::{CooccurrenceModel, InvertedIndex};
use tome_recommend::RecommendationEngine;

const ITEMS: u64 = 12;
const AUTHORS: [&str; 4] = ["Ann", "Ben", "Cleo", "Dev"];

fn catalog() -> Vec<Item> {
    (1..=ITEMS)
        .map(|id| {
            let author = AUTHORS[(id as usize) % AUTHORS.len()];
            Item::new(id, format!("Book {id}"), author, "Fiction")
        })
        .collect()
}

fn histories() -> impl Strategy<Value = Vec<BTreeSet<u64>>> {
    // Ids above ITEMS are stale references the engine must tolerate.
    prop::collection::vec(prop::collection::btree_set(1u64..=ITEMS + 2, 0..6), 1..10)
}

fn purchases() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((1u64..12, 1u64..=ITEMS + 2), 0..15)
}

fn engine(histories: &[BTreeSet<u64>], config: TomeConfig) -> RecommendationEngine {
    let profiles = histories
        .iter()
        .enumerate()
        .map(|(i, items)| {
            Profile::new(i as u64 + 1, format!("p{i}")).with_purchases(items.iter().copied())
        })
        .collect::<Vec<_>>();
    RecommendationEngine::with_config(config, catalog(), profiles).unwrap()
}

proptest! {
    #[test]
    fn prop_results_are_capped_unowned_distinct_and_catalogued(data in histories()) {
        let engine = engine(&data, TomeConfig::default());
        for profile_id in 1..=data.len() as u64 + 1 {
            let recs = engine.recommend(profile_id);
            prop_assert!(recs.len() <= 5);

            let ids: Vec<u64> = recs.iter().map(|r| r.item.id).collect();
            let distinct: BTreeSet<u64> = ids.iter().copied().collect();
            prop_assert_eq!(distinct.len(), ids.len(), "duplicates in {:?}", ids);

            if let Some(profile) = engine.profile(profile_id) {
                for id in &ids {
                    prop_assert!(!profile.owns(*id), "recommended owned item {}", id);
                    prop_assert!(engine.item(*id).is_some(), "stale item {}", id);
                }
                prop_assert!(recs.iter().all(|r| !r.reason.is_empty()));
            } else {
                prop_assert!(recs.is_empty());
            }
        }
    }

    #[test]
    fn prop_every_profile_with_unowned_items_gets_something(data in histories()) {
        let engine = engine(&data, TomeConfig::default());
        for profile in engine.profiles() {
            if !engine.unowned_items(profile.id).is_empty() {
                prop_assert!(!engine.recommend(profile.id).is_empty());
            }
        }
    }

    #[test]
    fn prop_purchases_keep_derived_models_in_sync(data in histories(), ops in purchases()) {
        let mut engine = engine(&data, TomeConfig::default());
        for (profile_id, item_id) in ops {
            let known = engine.profile(profile_id).is_some() && engine.item(item_id).is_some();
            let before = engine.profile(profile_id).map(|p| p.purchases.clone());

            prop_assert_eq!(engine.purchase(profile_id, item_id), known);

            let after = engine.profile(profile_id).map(|p| p.purchases.clone());
            if known {
                prop_assert!(engine.subscribers(item_id).contains(&profile_id));
                prop_assert!(after.as_ref().is_some_and(|p| p.contains(&item_id)));
            } else {
                prop_assert_eq!(before, after);
            }
        }

        let profiles: Vec<&Profile> = engine.profiles().collect();
        prop_assert_eq!(engine.index(), &InvertedIndex::build(profiles.iter().copied()));
        prop_assert_eq!(
            engine.cooccurrence(),
            &CooccurrenceModel::build(profiles.iter().copied())
        );
    }

    #[test]
    fn prop_cooccurrence_policies_are_equivalent(data in histories(), ops in purchases()) {
        let mut full_config = TomeConfig::default();
        full_config.mining.cooccurrence_policy = CooccurrencePolicy::FullRebuild;
        let mut incremental = engine(&data, TomeConfig::default());
        let mut full = engine(&data, full_config);

        for (profile_id, item_id) in ops {
            prop_assert_eq!(
                incremental.purchase(profile_id, item_id),
                full.purchase(profile_id, item_id)
            );
        }
        prop_assert_eq!(incremental.cooccurrence(), full.cooccurrence());
        for profile_id in 1..=data.len() as u64 {
            prop_assert_eq!(incremental.recommend(profile_id), full.recommend(profile_id));
        }
    }

    #[test]
    fn prop_recommend_is_deterministic(data in histories()) {
        let first = engine(&data, TomeConfig::default());
        let second = engine(&data, TomeConfig::default());
        for profile_id in 1..=data.len() as u64 {
            prop_assert_eq!(first.recommend(profile_id), second.recommend(profile_id));
        }
    }
}

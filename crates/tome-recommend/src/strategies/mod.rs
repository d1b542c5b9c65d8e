//! Strategy registry and the shared state each phase reads.
//!
//! Every strategy has the same shape: read the derived structures through
//! [`RecommendContext`], write into the shared [`Accumulator`]. The cascade
//! order is fixed at compile time by [`cascade`].

pub mod accumulator;
pub mod association;
pub mod content_based;
pub mod item_based;
pub mod popularity;
pub mod user_based;

pub use accumulator::Accumulator;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tome_core::config::RecommendConfig;
use tome_core::models::{Item, ItemId, Profile, ProfileId, Strategy};
use tome_index::{CooccurrenceModel, InvertedIndex};
use tome_mining::FrequentPatterns;
use tome_observability::events;

use crate::catalog::Catalog;

/// Read-only view over engine state for one recommendation call.
pub struct RecommendContext<'a> {
    pub catalog: &'a Catalog,
    pub profiles: &'a BTreeMap<ProfileId, Profile>,
    pub index: &'a InvertedIndex,
    pub cooccurrence: &'a CooccurrenceModel,
    pub patterns: &'a FrequentPatterns,
    pub config: &'a RecommendConfig,
}

impl RecommendContext<'_> {
    /// Resolve an id against the catalog, logging stale references.
    pub fn resolve(&self, item_id: ItemId, strategy: Strategy) -> Option<&Item> {
        let item = self.catalog.get(item_id);
        if item.is_none() {
            events::stale_reference(item_id, strategy);
        }
        item
    }

    /// Title of an owned item, if it is still in the catalog.
    pub fn title(&self, item_id: ItemId) -> Option<&str> {
        self.catalog.get(item_id).map(|item| item.title.as_str())
    }
}

/// A strategy's entry point.
pub type StrategyFn = fn(&RecommendContext<'_>, &Profile, &mut Accumulator);

/// A named strategy in the cascade.
pub struct StrategyEntry {
    pub strategy: Strategy,
    pub run: StrategyFn,
}

/// All strategies in priority order.
pub fn cascade() -> [StrategyEntry; 5] {
    [
        StrategyEntry {
            strategy: Strategy::UserBased,
            run: user_based::run,
        },
        StrategyEntry {
            strategy: Strategy::Association,
            run: association::run,
        },
        StrategyEntry {
            strategy: Strategy::ItemBased,
            run: item_based::run,
        },
        StrategyEntry {
            strategy: Strategy::ContentBased,
            run: content_based::run,
        },
        StrategyEntry {
            strategy: Strategy::Popularity,
            run: popularity::run,
        },
    ]
}

/// Run the cascade for `target`, stopping once the accumulator is full.
pub fn run_cascade(ctx: &RecommendContext<'_>, target: &Profile, acc: &mut Accumulator) {
    for entry in cascade() {
        if acc.is_full() {
            break;
        }
        let before = acc.len();
        (entry.run)(ctx, target, acc);
        events::strategy_completed(entry.strategy, acc.len() - before, acc.len());
    }
}

/// Highest score first; equal scores by ascending id.
pub(crate) fn by_score_desc<K: Ord>(a: &(K, f64), b: &(K, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.0.cmp(&b.0))
}

/// Flatten a score map into a ranked list.
pub(crate) fn ranked<K: Ord + Copy>(scores: &BTreeMap<K, f64>) -> Vec<(K, f64)> {
    let mut list: Vec<(K, f64)> = scores.iter().map(|(k, s)| (*k, *s)).collect();
    list.sort_by(by_score_desc);
    list
}

//! Item-based collaborative filtering.
//!
//! Two items are similar when the sets of profiles that bought them overlap
//! (Jaccard over subscriber sets). Each owned item nominates its closest
//! unseen items; a candidate nominated by several owned items keeps its best
//! score and the owned item that produced it.

use std::collections::BTreeMap;

use tome_core::models::{ItemId, Profile, Strategy};
use tome_index::jaccard;

use super::{by_score_desc, ranked, Accumulator, RecommendContext};

pub fn run(ctx: &RecommendContext<'_>, target: &Profile, acc: &mut Accumulator) {
    let mut best: BTreeMap<ItemId, (f64, ItemId)> = BTreeMap::new();

    for &owned in &target.purchases {
        let owned_readers = ctx.index.subscribers(owned);
        if owned_readers.is_empty() {
            continue;
        }

        let mut similar: Vec<(ItemId, f64)> = ctx
            .index
            .iter()
            .filter(|&(id, _)| {
                id != owned
                    && !target.owns(id)
                    && !acc.is_chosen(id)
                    && ctx.catalog.contains(id)
            })
            .map(|(id, readers)| (id, jaccard(owned_readers, readers)))
            .filter(|(_, score)| *score > 0.0)
            .collect();
        similar.sort_by(by_score_desc);
        similar.truncate(ctx.config.item_candidates_per_owned);

        for (candidate, score) in similar {
            let entry = best.entry(candidate).or_insert((score, owned));
            if score > entry.0 {
                *entry = (score, owned);
            }
        }
    }

    let scores: BTreeMap<ItemId, f64> = best.iter().map(|(id, (score, _))| (*id, *score)).collect();
    for (item_id, _) in ranked(&scores) {
        if acc.is_full() {
            break;
        }
        let Some(item) = ctx.resolve(item_id, Strategy::ItemBased) else {
            continue;
        };
        let reason = match best.get(&item_id).and_then(|(_, owned)| ctx.title(*owned)) {
            Some(title) => format!("Shares readers with {title}"),
            None => "Shares readers with your purchases".to_string(),
        };
        acc.push(item, reason, Strategy::ItemBased);
    }
}

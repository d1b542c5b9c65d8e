//! User-based collaborative filtering.
//!
//! Candidate neighbors come from the inverted index (anyone who bought
//! something the target owns), are scored by Jaccard similarity of purchase
//! sets, and the top K vote for their unseen items with their similarity.

use std::collections::{BTreeMap, BTreeSet};

use tome_core::models::{ItemId, Profile, Strategy};
use tome_index::jaccard;

use super::{by_score_desc, ranked, Accumulator, RecommendContext};

/// Neighbors of `target` with similarity > 0, most similar first, at most K.
pub fn nearest_neighbors<'a>(
    ctx: &RecommendContext<'a>,
    target: &Profile,
) -> Vec<(&'a Profile, f64)> {
    let mut candidates = ctx.index.co_subscribers(&target.purchases);
    candidates.remove(&target.id);

    let mut scored: Vec<(&'a Profile, f64)> = candidates
        .into_iter()
        .filter_map(|id| ctx.profiles.get(&id))
        .map(|neighbor| (neighbor, jaccard(&target.purchases, &neighbor.purchases)))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    scored.sort_by(|a, b| by_score_desc(&(a.0.id, a.1), &(b.0.id, b.1)));
    scored.truncate(ctx.config.neighbor_count);
    scored
}

pub fn run(ctx: &RecommendContext<'_>, target: &Profile, acc: &mut Accumulator) {
    let neighbors = nearest_neighbors(ctx, target);
    if neighbors.is_empty() {
        return;
    }

    let mut scores: BTreeMap<ItemId, f64> = BTreeMap::new();
    let mut voters: BTreeMap<ItemId, Vec<&Profile>> = BTreeMap::new();
    for &(neighbor, similarity) in &neighbors {
        for &item_id in neighbor.purchases.difference(&target.purchases) {
            *scores.entry(item_id).or_insert(0.0) += similarity;
            voters.entry(item_id).or_default().push(neighbor);
        }
    }

    for (item_id, _) in ranked(&scores) {
        if acc.is_full() {
            break;
        }
        if acc.is_chosen(item_id) {
            continue;
        }
        let Some(item) = ctx.resolve(item_id, Strategy::UserBased) else {
            continue;
        };
        let reason = reason(ctx, target, voters.get(&item_id).map_or(&[][..], Vec::as_slice));
        acc.push(item, reason, Strategy::UserBased);
    }
}

/// Name the titles the target shares with the neighbors who voted for an item.
fn reason(ctx: &RecommendContext<'_>, target: &Profile, voters: &[&Profile]) -> String {
    let shared: BTreeSet<ItemId> = voters
        .iter()
        .flat_map(|voter| voter.purchases.intersection(&target.purchases).copied())
        .collect();
    let titles: Vec<&str> = shared
        .iter()
        .filter_map(|&id| ctx.title(id))
        .take(ctx.config.max_reason_titles)
        .collect();

    let readers = if voters.len() == 1 { "a reader" } else { "readers" };
    if titles.is_empty() {
        format!("Bought by {readers} with similar purchases")
    } else {
        format!("Bought by {readers} who also bought {}", titles.join(", "))
    }
}

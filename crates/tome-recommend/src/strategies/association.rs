//! Association signal: "bought X, tends to also buy Y".
//!
//! Sums, over every owned item, the weights of its partners in either the
//! mined pattern bases or the raw co-occurrence model.

use std::collections::BTreeMap;

use tome_core::config::AssociationSource;
use tome_core::models::{ItemId, Profile, Strategy};

use super::{ranked, Accumulator, RecommendContext};

pub fn run(ctx: &RecommendContext<'_>, target: &Profile, acc: &mut Accumulator) {
    let mut scores: BTreeMap<ItemId, f64> = BTreeMap::new();
    // candidate → (owned item with the largest single contribution, weight)
    let mut triggers: BTreeMap<ItemId, (ItemId, u64)> = BTreeMap::new();

    for &owned in &target.purchases {
        let partners = match ctx.config.association_source {
            AssociationSource::FrequentPatterns => ctx.patterns.related(owned),
            AssociationSource::Cooccurrence => ctx.cooccurrence.cooccurs_with(owned),
        };
        for (&partner, &weight) in partners {
            if target.owns(partner) || acc.is_chosen(partner) {
                continue;
            }
            *scores.entry(partner).or_insert(0.0) += weight as f64;
            let trigger = triggers.entry(partner).or_insert((owned, weight));
            if weight > trigger.1 {
                *trigger = (owned, weight);
            }
        }
    }

    for (item_id, _) in ranked(&scores) {
        if acc.is_full() {
            break;
        }
        let Some(item) = ctx.resolve(item_id, Strategy::Association) else {
            continue;
        };
        let reason = match triggers.get(&item_id).and_then(|(owned, _)| ctx.title(*owned)) {
            Some(title) => format!("Frequently bought together with {title}"),
            None => "Frequently bought together with your purchases".to_string(),
        };
        acc.push(item, reason, Strategy::Association);
    }
}

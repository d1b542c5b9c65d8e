//! Content fallback: more titles by authors the target already reads.

use std::collections::BTreeSet;

use tome_core::models::{Profile, Strategy};

use super::{Accumulator, RecommendContext};

pub fn run(ctx: &RecommendContext<'_>, target: &Profile, acc: &mut Accumulator) {
    if !target.has_history() {
        return;
    }

    let authors: BTreeSet<&str> = target
        .purchases
        .iter()
        .filter_map(|&id| ctx.catalog.get(id))
        .map(|item| item.author.as_str())
        .collect();
    if authors.is_empty() {
        return;
    }

    for item in ctx.catalog.iter() {
        if acc.is_full() {
            break;
        }
        if target.owns(item.id) || acc.is_chosen(item.id) {
            continue;
        }
        if authors.contains(item.author.as_str()) {
            acc.push(item, format!("More by {}", item.author), Strategy::ContentBased);
        }
    }
}

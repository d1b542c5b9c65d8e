//! Popularity fallback for cold starts and dead ends.

use std::cmp::Reverse;

use tome_core::models::{Item, Profile, Strategy};

use super::{Accumulator, RecommendContext};

/// Runs only when every earlier phase came back empty.
pub fn run(ctx: &RecommendContext<'_>, target: &Profile, acc: &mut Accumulator) {
    if !acc.is_empty() {
        return;
    }

    let mut trending: Vec<(&Item, usize)> = ctx
        .catalog
        .iter()
        .filter(|item| !target.owns(item.id))
        .map(|item| (item, ctx.index.purchase_count(item.id)))
        .collect();
    // Stable sort: equal counts keep catalog order.
    trending.sort_by_key(|&(_, count)| Reverse(count));

    for (item, count) in trending {
        if acc.is_full() {
            break;
        }
        let reason = match count {
            0 => "Trending: new in the catalog".to_string(),
            1 => "Trending: bought by 1 reader".to_string(),
            n => format!("Trending: bought by {n} readers"),
        };
        acc.push(item, reason, Strategy::Popularity);
    }
}

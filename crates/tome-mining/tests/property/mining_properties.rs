//! Property tests for tome-mining: tree ordering, link chains, and pattern
//! bases checked against brute-force counting.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tome_mining::{FpGrowthMiner, FpTree, NodeId};

fn transactions() -> impl Strategy<Value = Vec<BTreeSet<u64>>> {
    prop::collection::vec(prop::collection::btree_set(0u64..15, 0..8), 0..25)
}

fn brute_support(data: &[BTreeSet<u64>], item: u64) -> u64 {
    data.iter().filter(|t| t.contains(&item)).count() as u64
}

proptest! {
    #[test]
    fn prop_paths_follow_descending_support(data in transactions(), min_support in 1u64..4) {
        let tree = FpTree::build(&data, min_support);
        for item in tree.header().mining_order() {
            for node in tree.occurrences(item) {
                // Walking up from a node, support never decreases.
                let mut path = vec![item];
                path.extend(tree.prefix_path(node));
                for pair in path.windows(2) {
                    prop_assert!(
                        tree.header().compare_for_insertion(pair[1], pair[0]).is_lt(),
                        "path {:?} out of order", path
                    );
                }
            }
        }
    }

    #[test]
    fn prop_link_chain_counts_sum_to_support(data in transactions(), min_support in 1u64..4) {
        let tree = FpTree::build(&data, min_support);
        for item in 0u64..15 {
            let chained: u64 = tree.occurrences(item).map(|id| tree.node(id).count).sum();
            let support = brute_support(&data, item);
            if support >= min_support {
                prop_assert_eq!(chained, support);
                prop_assert_eq!(tree.header().support(item), support);
            } else {
                prop_assert_eq!(chained, 0);
            }
        }
    }

    #[test]
    fn prop_pattern_bases_split_pair_counts(data in transactions()) {
        // With min_support 1 every item is frequent; each transaction holding
        // both x and y contributes to exactly one of base(x)[y] or base(y)[x].
        let patterns = FpGrowthMiner::default().mine(&data);
        for x in 0u64..15 {
            for y in (x + 1)..15 {
                let both = data.iter().filter(|t| t.contains(&x) && t.contains(&y)).count() as u64;
                let forward = patterns.related(x).get(&y).copied().unwrap_or(0);
                let backward = patterns.related(y).get(&x).copied().unwrap_or(0);
                prop_assert_eq!(forward + backward, both);
            }
        }
    }

    #[test]
    fn prop_rebuild_is_deterministic(data in transactions()) {
        let miner = FpGrowthMiner::default();
        prop_assert_eq!(miner.mine(&data), miner.mine(&data));
    }

    #[test]
    fn prop_root_is_never_a_path_item(data in transactions()) {
        let tree = FpTree::build(&data, 1);
        prop_assert!(tree.root().is_root());
        prop_assert_eq!(tree.root().parent, None::<NodeId>);
    }
}

use std::collections::BTreeSet;

use tome_core::models::{Item, ItemId, Recommendation, Strategy};

/// Result list shared by every phase of one cascade run.
///
/// Tracks chosen ids so later phases skip anything already emitted, and
/// refuses pushes once the cap is reached.
#[derive(Debug)]
pub struct Accumulator {
    results: Vec<Recommendation>,
    chosen: BTreeSet<ItemId>,
    cap: usize,
}

impl Accumulator {
    pub fn new(cap: usize) -> Self {
        Self {
            results: Vec::with_capacity(cap),
            chosen: BTreeSet::new(),
            cap,
        }
    }

    pub fn is_full(&self) -> bool {
        self.results.len() >= self.cap
    }

    pub fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.results.len())
    }

    pub fn is_chosen(&self, item_id: ItemId) -> bool {
        self.chosen.contains(&item_id)
    }

    /// Append a recommendation. Returns `false` when full or already chosen.
    pub fn push(&mut self, item: &Item, reason: String, strategy: Strategy) -> bool {
        if self.is_full() || !self.chosen.insert(item.id) {
            return false;
        }
        self.results.push(Recommendation {
            item: item.clone(),
            reason,
            strategy,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<Recommendation> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates_and_overflow() {
        let a = Item::new(1, "A", "x", "g");
        let b = Item::new(2, "B", "x", "g");
        let c = Item::new(3, "C", "x", "g");
        let mut acc = Accumulator::new(2);

        assert!(acc.push(&a, "r".into(), Strategy::UserBased));
        assert!(!acc.push(&a, "r".into(), Strategy::Association));
        assert_eq!(acc.remaining(), 1);
        assert!(acc.push(&b, "r".into(), Strategy::ItemBased));
        assert!(acc.is_full());
        assert!(!acc.push(&c, "r".into(), Strategy::Popularity));
        assert!(!acc.is_chosen(3));
        assert_eq!(acc.into_results().len(), 2);
    }

    #[test]
    fn zero_cap_is_immediately_full() {
        let acc = Accumulator::new(0);
        assert!(acc.is_full());
        assert_eq!(acc.remaining(), 0);
    }
}

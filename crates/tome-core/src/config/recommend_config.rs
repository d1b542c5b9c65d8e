use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::RECOMMENDATION_HARD_CAP;

/// Which derived structure feeds the association phase of the cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationSource {
    /// Conditional pattern bases mined from the prefix tree.
    #[default]
    FrequentPatterns,
    /// Raw pairwise co-purchase counts.
    Cooccurrence,
}

/// Recommendation cascade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Maximum recommendations per call (clamped to the hard cap of 5).
    pub max_results: usize,
    /// Nearest neighbors consulted by user-based filtering (K).
    pub neighbor_count: usize,
    /// Similar items kept per owned item in item-based filtering.
    pub item_candidates_per_owned: usize,
    /// Source of the "bought X, also bought Y" signal.
    pub association_source: AssociationSource,
    /// Maximum shared titles quoted in a user-based reason.
    pub max_reason_titles: usize,
}

impl RecommendConfig {
    /// The effective result cap after clamping to the hard cap.
    pub fn result_cap(&self) -> usize {
        self.max_results.min(RECOMMENDATION_HARD_CAP)
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::DEFAULT_MAX_RESULTS,
            neighbor_count: defaults::DEFAULT_NEIGHBOR_COUNT,
            item_candidates_per_owned: defaults::DEFAULT_ITEM_CANDIDATES_PER_OWNED,
            association_source: AssociationSource::default(),
            max_reason_titles: defaults::DEFAULT_MAX_REASON_TITLES,
        }
    }
}

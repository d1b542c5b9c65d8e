use serde::{Deserialize, Serialize};

use super::defaults;

/// How the co-occurrence model absorbs a purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooccurrencePolicy {
    /// Add only the pairs formed by the new item and the profile's prior purchases.
    #[default]
    Incremental,
    /// Recount every pair across all profiles.
    FullRebuild,
}

/// Pattern mining and co-occurrence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum global support for an item to enter the prefix tree. Must be >= 1.
    pub min_support: u64,
    /// Co-occurrence maintenance policy on purchase.
    pub cooccurrence_policy: CooccurrencePolicy,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: defaults::DEFAULT_MIN_SUPPORT,
            cooccurrence_policy: CooccurrencePolicy::default(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Catalog-wide counters for dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub profiles: usize,
    pub items: usize,
    /// Total purchases across all profiles.
    pub interactions: usize,
}

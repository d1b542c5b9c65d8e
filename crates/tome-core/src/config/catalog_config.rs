use serde::{Deserialize, Serialize};

use super::defaults;

/// Id allocation for administrative inserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Id given to the first profile when none exist.
    pub profile_id_floor: u64,
    /// The first item gets `item_id_floor + 1` when the catalog is empty.
    pub item_id_floor: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            profile_id_floor: defaults::DEFAULT_PROFILE_ID_FLOOR,
            item_id_floor: defaults::DEFAULT_ITEM_ID_FLOOR,
        }
    }
}

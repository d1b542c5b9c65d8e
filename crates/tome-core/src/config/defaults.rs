// Single source of truth for all default values.

// --- Recommend ---
pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_NEIGHBOR_COUNT: usize = 5;
pub const DEFAULT_ITEM_CANDIDATES_PER_OWNED: usize = 5;
pub const DEFAULT_MAX_REASON_TITLES: usize = 3;

// --- Mining ---
pub const DEFAULT_MIN_SUPPORT: u64 = 1;

// --- Catalog ---
pub const DEFAULT_PROFILE_ID_FLOOR: u64 = 1;
pub const DEFAULT_ITEM_ID_FLOOR: u64 = 0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

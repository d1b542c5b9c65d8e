/// Tome engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard upper bound on recommendations returned from a single call.
/// A configured `max_results` above this is clamped.
pub const RECOMMENDATION_HARD_CAP: usize = 5;

/// Smallest accepted minimum-support threshold for pattern mining.
pub const MIN_SUPPORT_FLOOR: u64 = 1;

//! Span definitions per operation: recommend, purchase, rebuild.

/// Create a recommendation span.
#[macro_export]
macro_rules! recommend_span {
    ($profile_id:expr) => {
        tracing::info_span!("tome.recommend", profile_id = $profile_id)
    };
}

/// Create a purchase span.
#[macro_export]
macro_rules! purchase_span {
    ($profile_id:expr, $item_id:expr) => {
        tracing::info_span!("tome.purchase", profile_id = $profile_id, item_id = $item_id)
    };
}

/// Create a derived-model rebuild span.
#[macro_export]
macro_rules! rebuild_span {
    ($reason:expr) => {
        tracing::info_span!("tome.rebuild", reason = %$reason)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECOMMEND: &str = "tome.recommend";
    pub const PURCHASE: &str = "tome.purchase";
    pub const REBUILD: &str = "tome.rebuild";
}

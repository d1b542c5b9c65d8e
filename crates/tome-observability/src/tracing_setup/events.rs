//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use tome_core::models::{ItemId, ProfileId, Strategy};

/// Log a successfully applied purchase.
pub fn purchase_applied(profile_id: ProfileId, item_id: ItemId, newly_owned: bool) {
    tracing::info!(
        event = "purchase_applied",
        profile_id = profile_id,
        item_id = item_id,
        newly_owned = newly_owned,
        "purchase applied"
    );
}

/// Log a purchase rejected because an id is unknown.
pub fn purchase_rejected(profile_id: ProfileId, item_id: ItemId, reason: &str) {
    tracing::debug!(
        event = "purchase_rejected",
        profile_id = profile_id,
        item_id = item_id,
        reason = %reason,
        "purchase rejected"
    );
}

/// Log a rebuild of the derived structures.
pub fn models_rebuilt(indexed_items: usize, cooccurring_items: usize, patterned_items: usize) {
    tracing::debug!(
        event = "models_rebuilt",
        indexed_items = indexed_items,
        cooccurring_items = cooccurring_items,
        patterned_items = patterned_items,
        "derived models rebuilt"
    );
}

/// Log the outcome of one cascade phase.
pub fn strategy_completed(strategy: Strategy, emitted: usize, total: usize) {
    tracing::debug!(
        event = "strategy_completed",
        strategy = %strategy,
        emitted = emitted,
        total = total,
        "strategy completed"
    );
}

/// Log an id found in a derived structure but missing from the catalog.
pub fn stale_reference(item_id: ItemId, strategy: Strategy) {
    tracing::debug!(
        event = "stale_reference",
        item_id = item_id,
        strategy = %strategy,
        "skipping stale item reference"
    );
}

/// Log a persistence hand-off failure. The in-memory state is kept.
pub fn persistence_failed(profile_id: ProfileId, error: &str) {
    tracing::warn!(
        event = "persistence_failed",
        profile_id = profile_id,
        error = %error,
        "persistence failed; in-memory state retained"
    );
}

/// Log engine start-up once the derived structures are built.
pub fn engine_initialized(version: &str, profiles: usize, items: usize) {
    tracing::info!(
        event = "engine_initialized",
        version = %version,
        profiles = profiles,
        items = items,
        "recommendation engine ready"
    );
}

/// Log a failed hand-off of a newly added catalog item. The item stays in
/// the catalog.
pub fn item_persistence_failed(item_id: ItemId, error: &str) {
    tracing::warn!(
        event = "item_persistence_failed",
        item_id = item_id,
        error = %error,
        "item persistence failed; in-memory state retained"
    );
}

use super::{CatalogError, MiningError};
use crate::models::ProfileId;

/// Top-level error for the Tome engine.
///
/// Unknown ids, stale references, and empty inputs are not errors: queries
/// absorb them as fewer (or no) recommendations. These variants cover
/// construction, configuration, and the external persistence hand-off.
#[derive(Debug, thiserror::Error)]
pub enum TomeError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("mining error: {0}")]
    MiningError(#[from] MiningError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("persistence failed for profile {profile_id}: {reason}")]
    PersistenceError { profile_id: ProfileId, reason: String },
}

/// Convenience alias used across the workspace.
pub type TomeResult<T> = Result<T, TomeError>;

/// Pattern mining errors.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must be at least 1, got {min_support}")]
    InvalidMinSupport { min_support: u64 },
}

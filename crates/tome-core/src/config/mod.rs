//! Layered configuration. Every section falls back to [`defaults`] when omitted.

pub mod catalog_config;
pub mod defaults;
pub mod mining_config;
pub mod observability_config;
pub mod recommend_config;

pub use catalog_config::CatalogConfig;
pub use mining_config::{CooccurrencePolicy, MiningConfig};
pub use observability_config::ObservabilityConfig;
pub use recommend_config::{AssociationSource, RecommendConfig};

use serde::{Deserialize, Serialize};

use crate::constants::MIN_SUPPORT_FLOOR;
use crate::errors::{TomeError, TomeResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomeConfig {
    pub recommend: RecommendConfig,
    pub mining: MiningConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl TomeConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> TomeResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| TomeError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> TomeResult<()> {
        if self.mining.min_support < MIN_SUPPORT_FLOOR {
            return Err(TomeError::ConfigError(format!(
                "mining.min_support must be at least {MIN_SUPPORT_FLOOR}, got {}",
                self.mining.min_support
            )));
        }
        if self.recommend.max_results == 0 {
            return Err(TomeError::ConfigError(
                "recommend.max_results must be positive".to_string(),
            ));
        }
        if self.recommend.neighbor_count == 0 {
            return Err(TomeError::ConfigError(
                "recommend.neighbor_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

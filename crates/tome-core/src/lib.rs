//! # tome-core
//!
//! Foundation crate for the Tome recommendation engine.
//! Defines the catalog/profile types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TomeConfig;
pub use errors::{TomeError, TomeResult};
pub use models::{EngineStats, Item, ItemId, Profile, ProfileId, Recommendation, Strategy};

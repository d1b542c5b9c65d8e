pub mod catalog_error;
pub mod mining_error;
pub mod tome_error;

pub use catalog_error::CatalogError;
pub use mining_error::MiningError;
pub use tome_error::{TomeError, TomeResult};

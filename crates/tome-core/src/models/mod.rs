mod item;
mod profile;
mod recommendation;
mod stats;

pub use item::{Item, ItemId};
pub use profile::{Profile, ProfileId};
pub use recommendation::{Recommendation, Strategy};
pub use stats::EngineStats;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Item;

/// The cascade phase that produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    UserBased,
    Association,
    ItemBased,
    ContentBased,
    Popularity,
}

impl Strategy {
    /// Cascade order, highest priority first.
    pub const CASCADE: [Strategy; 5] = [
        Strategy::UserBased,
        Strategy::Association,
        Strategy::ItemBased,
        Strategy::ContentBased,
        Strategy::Popularity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::UserBased => "user_based",
            Strategy::Association => "association",
            Strategy::ItemBased => "item_based",
            Strategy::ContentBased => "content_based",
            Strategy::Popularity => "popularity",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One explained recommendation. Produced fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item: Item,
    /// Human-readable justification.
    pub reason: String,
    pub strategy: Strategy,
}

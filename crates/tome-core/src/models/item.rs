use serde::{Deserialize, Serialize};

/// Stable catalog identifier.
pub type ItemId = u64;

/// A purchasable catalog entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Item {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}

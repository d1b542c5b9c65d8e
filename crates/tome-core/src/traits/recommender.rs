use crate::models::{ItemId, ProfileId, Recommendation};

/// Query and mutation boundary offered to a presentation layer.
pub trait IRecommender {
    /// Up to five explained recommendations. Empty for an unknown profile.
    fn recommend(&self, profile_id: ProfileId) -> Vec<Recommendation>;

    /// Apply a purchase. `false` if either id is unknown.
    fn purchase(&mut self, profile_id: ProfileId, item_id: ItemId) -> bool;
}

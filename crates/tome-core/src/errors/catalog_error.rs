use crate::models::{ItemId, ProfileId};

/// Errors raised while loading catalog/profile state or allocating ids.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate item id {id} in catalog")]
    DuplicateItem { id: ItemId },

    #[error("duplicate profile id {id}")]
    DuplicateProfile { id: ProfileId },

    #[error("no item id left above {max}")]
    ItemIdsExhausted { max: ItemId },

    #[error("no profile id left above {max}")]
    ProfileIdsExhausted { max: ProfileId },
}

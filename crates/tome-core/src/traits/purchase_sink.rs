use crate::errors::TomeResult;
use crate::models::{Item, Profile};

/// External store that persists mutations after the engine applies them.
///
/// The engine never persists itself. A failing sink does not undo the
/// in-memory update.
pub trait IPurchaseSink: Send + Sync {
    /// Persist a profile whose purchase set just changed.
    fn persist_profile(&self, profile: &Profile) -> TomeResult<()>;

    /// Persist a newly added catalog item.
    fn persist_item(&self, _item: &Item) -> TomeResult<()> {
        Ok(())
    }
}

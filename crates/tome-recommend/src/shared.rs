//! SharedEngine: single-writer/multiple-reader wrapper for concurrent callers.
//!
//! A purchase mutates the profile, index, co-occurrence model, and patterns
//! together, so the whole engine sits behind one `RwLock`: readers never see
//! a half-applied purchase. Persistence runs after the write lock is
//! released and cannot undo the in-memory update.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tome_core::errors::{TomeError, TomeResult};
use tome_core::models::{EngineStats, ItemId, ProfileId, Recommendation};
use tome_core::traits::IPurchaseSink;
use tome_observability::events;

use crate::engine::RecommendationEngine;

#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<RecommendationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Run `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&RecommendationEngine) -> R) -> R {
        let guard = self.read_guard();
        f(&*guard)
    }

    /// Run `f` under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut RecommendationEngine) -> R) -> R {
        let mut guard = self.write_guard();
        f(&mut *guard)
    }

    pub fn recommend(&self, profile_id: ProfileId) -> Vec<Recommendation> {
        self.read(|engine| engine.recommend(profile_id))
    }

    pub fn purchase(&self, profile_id: ProfileId, item_id: ItemId) -> bool {
        self.write(|engine| engine.purchase(profile_id, item_id))
    }

    pub fn register_profile(&self, name: impl Into<String>) -> TomeResult<ProfileId> {
        self.write(|engine| engine.register_profile(name))
    }

    pub fn add_item(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> TomeResult<ItemId> {
        self.write(|engine| engine.add_item(title, author, genre))
    }

    pub fn stats(&self) -> EngineStats {
        self.read(RecommendationEngine::stats)
    }

    /// Apply a purchase, then hand the updated profile to `sink`.
    ///
    /// Returns `Ok(false)` for unknown ids (nothing is persisted). A sink
    /// failure is returned as an error but the purchase stays applied, so the
    /// caller may retry persistence alone.
    pub fn purchase_and_persist(
        &self,
        profile_id: ProfileId,
        item_id: ItemId,
        sink: &dyn IPurchaseSink,
    ) -> TomeResult<bool> {
        let snapshot = self.write(|engine| {
            if engine.purchase(profile_id, item_id) {
                engine.profile(profile_id).cloned()
            } else {
                None
            }
        });
        let Some(profile) = snapshot else {
            return Ok(false);
        };

        sink.persist_profile(&profile).map_err(|e| {
            events::persistence_failed(profile_id, &e.to_string());
            match e {
                TomeError::PersistenceError { .. } => e,
                other => TomeError::PersistenceError {
                    profile_id,
                    reason: other.to_string(),
                },
            }
        })?;
        Ok(true)
    }

    /// Add a catalog item, then hand it to `sink`.
    ///
    /// As with purchases, a sink failure is logged and returned but the item
    /// stays in the catalog.
    pub fn add_item_and_persist(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        sink: &dyn IPurchaseSink,
    ) -> TomeResult<ItemId> {
        let (id, item) = self.write(|engine| {
            let id = engine.add_item(title, author, genre)?;
            Ok::<_, TomeError>((id, engine.item(id).cloned()))
        })?;
        if let Some(item) = item {
            sink.persist_item(&item).inspect_err(|e| {
                events::item_persistence_failed(id, &e.to_string());
            })?;
        }
        Ok(id)
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, RecommendationEngine> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("engine lock poisoned; recovering read access");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, RecommendationEngine> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("engine lock poisoned; recovering write access");
            PoisonError::into_inner(poisoned)
        })
    }
}

//! RecommendationEngine: owns catalog/profile state and every derived
//! structure, applies purchases, runs the cascade.
//!
//! A purchase updates the profile, the inverted index, the co-occurrence
//! model, and the mined patterns together before returning. The engine never
//! persists anything; callers hand the updated profile to their store.

use std::collections::{BTreeMap, BTreeSet};

use tome_core::config::{CooccurrencePolicy, TomeConfig};
use tome_core::constants::VERSION;
use tome_core::errors::{CatalogError, TomeResult};
use tome_core::models::{EngineStats, Item, ItemId, Profile, ProfileId, Recommendation};
use tome_core::traits::IRecommender;
use tome_index::{CooccurrenceModel, InvertedIndex};
use tome_mining::{FpGrowthMiner, FrequentPatterns};
use tome_observability::{events, purchase_span, rebuild_span, recommend_span};

use crate::catalog::Catalog;
use crate::strategies::{self, Accumulator, RecommendContext};

pub struct RecommendationEngine {
    config: TomeConfig,
    catalog: Catalog,
    profiles: BTreeMap<ProfileId, Profile>,
    index: InvertedIndex,
    cooccurrence: CooccurrenceModel,
    patterns: FrequentPatterns,
    miner: FpGrowthMiner,
}

impl RecommendationEngine {
    /// Build with default configuration.
    pub fn new(
        items: impl IntoIterator<Item = Item>,
        profiles: impl IntoIterator<Item = Profile>,
    ) -> TomeResult<Self> {
        Self::with_config(TomeConfig::default(), items, profiles)
    }

    /// Load catalog and profiles, then build every derived structure before
    /// the first query.
    pub fn with_config(
        config: TomeConfig,
        items: impl IntoIterator<Item = Item>,
        profiles: impl IntoIterator<Item = Profile>,
    ) -> TomeResult<Self> {
        config.validate()?;
        let miner = FpGrowthMiner::new(config.mining.min_support)?;
        let catalog = Catalog::from_items(items)?;

        let mut by_id = BTreeMap::new();
        for profile in profiles {
            if by_id.contains_key(&profile.id) {
                return Err(CatalogError::DuplicateProfile { id: profile.id }.into());
            }
            by_id.insert(profile.id, profile);
        }

        let mut engine = Self {
            config,
            catalog,
            profiles: by_id,
            index: InvertedIndex::new(),
            cooccurrence: CooccurrenceModel::new(),
            patterns: FrequentPatterns::new(),
            miner,
        };
        engine.rebuild();
        events::engine_initialized(VERSION, engine.profiles.len(), engine.catalog.len());
        Ok(engine)
    }

    /// Recompute the index, co-occurrence model, and patterns from scratch.
    pub fn rebuild(&mut self) {
        let _span = rebuild_span!("full").entered();
        self.index = InvertedIndex::build(self.profiles.values());
        self.cooccurrence = CooccurrenceModel::build(self.profiles.values());
        self.patterns = self.miner.mine_profiles(self.profiles.values());
        events::models_rebuilt(
            self.index.len(),
            self.cooccurrence.len(),
            self.patterns.len(),
        );
    }

    /// Apply a purchase. `false` if either id is unknown; the profile is then
    /// left untouched. Re-buying an owned item succeeds without changes.
    pub fn purchase(&mut self, profile_id: ProfileId, item_id: ItemId) -> bool {
        let _span = purchase_span!(profile_id, item_id).entered();

        if !self.catalog.contains(item_id) {
            events::purchase_rejected(profile_id, item_id, "unknown item");
            return false;
        }
        let Some(profile) = self.profiles.get_mut(&profile_id) else {
            events::purchase_rejected(profile_id, item_id, "unknown profile");
            return false;
        };

        if profile.owns(item_id) {
            events::purchase_applied(profile_id, item_id, false);
            return true;
        }

        if self.config.mining.cooccurrence_policy == CooccurrencePolicy::Incremental {
            self.cooccurrence.record_purchase(&profile.purchases, item_id);
        }
        profile.add_purchase(item_id);
        self.index.record(profile_id, item_id);

        if self.config.mining.cooccurrence_policy == CooccurrencePolicy::FullRebuild {
            self.cooccurrence = CooccurrenceModel::build(self.profiles.values());
        }
        // Supports changed, so the prefix tree is rebuilt in full.
        self.patterns = self.miner.mine_profiles(self.profiles.values());

        events::purchase_applied(profile_id, item_id, true);
        true
    }

    /// Up to five explained recommendations. Empty for an unknown profile or
    /// an empty catalog.
    pub fn recommend(&self, profile_id: ProfileId) -> Vec<Recommendation> {
        let _span = recommend_span!(profile_id).entered();

        let Some(target) = self.profiles.get(&profile_id) else {
            return Vec::new();
        };
        if self.catalog.is_empty() {
            return Vec::new();
        }

        let ctx = RecommendContext {
            catalog: &self.catalog,
            profiles: &self.profiles,
            index: &self.index,
            cooccurrence: &self.cooccurrence,
            patterns: &self.patterns,
            config: &self.config.recommend,
        };
        let mut acc = Accumulator::new(self.config.recommend.result_cap());
        strategies::run_cascade(&ctx, target, &mut acc);
        acc.into_results()
    }

    /// Register a profile with an empty history. The new id is strictly
    /// greater than every existing one, or the configured floor.
    pub fn register_profile(&mut self, name: impl Into<String>) -> TomeResult<ProfileId> {
        let floor = self.config.catalog.profile_id_floor;
        let id = match self.profiles.keys().next_back() {
            None => floor,
            Some(&max) => max
                .checked_add(1)
                .ok_or(CatalogError::ProfileIdsExhausted { max })?
                .max(floor),
        };
        self.profiles.insert(id, Profile::new(id, name));
        Ok(id)
    }

    /// Add a catalog item. No derived model changes until the next purchase.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> TomeResult<ItemId> {
        let id = self
            .catalog
            .add(self.config.catalog.item_id_floor, title, author, genre)?;
        Ok(id)
    }

    // --- Read access ---

    pub fn config(&self) -> &TomeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.catalog.get(item_id)
    }

    pub fn profile(&self, profile_id: ProfileId) -> Option<&Profile> {
        self.profiles.get(&profile_id)
    }

    /// All profiles in ascending id order.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    /// The profile's purchases resolved against the catalog, in catalog
    /// order. Stale ids are skipped.
    pub fn owned_items(&self, profile_id: ProfileId) -> Vec<&Item> {
        let Some(profile) = self.profiles.get(&profile_id) else {
            return Vec::new();
        };
        self.catalog.iter().filter(|item| profile.owns(item.id)).collect()
    }

    /// Catalog items the profile does not own, in catalog order.
    pub fn unowned_items(&self, profile_id: ProfileId) -> Vec<&Item> {
        let Some(profile) = self.profiles.get(&profile_id) else {
            return Vec::new();
        };
        self.catalog.iter().filter(|item| !profile.owns(item.id)).collect()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            profiles: self.profiles.len(),
            items: self.catalog.len(),
            interactions: self.profiles.values().map(|p| p.purchases.len()).sum(),
        }
    }

    // --- Derived structures ---

    pub fn subscribers(&self, item_id: ItemId) -> &BTreeSet<ProfileId> {
        self.index.subscribers(item_id)
    }

    pub fn cooccurs_with(&self, item_id: ItemId) -> &BTreeMap<ItemId, u64> {
        self.cooccurrence.cooccurs_with(item_id)
    }

    pub fn related_patterns(&self, item_id: ItemId) -> &BTreeMap<ItemId, u64> {
        self.patterns.related(item_id)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn cooccurrence(&self) -> &CooccurrenceModel {
        &self.cooccurrence
    }

    pub fn patterns(&self) -> &FrequentPatterns {
        &self.patterns
    }
}

impl IRecommender for RecommendationEngine {
    fn recommend(&self, profile_id: ProfileId) -> Vec<Recommendation> {
        RecommendationEngine::recommend(self, profile_id)
    }

    fn purchase(&mut self, profile_id: ProfileId, item_id: ItemId) -> bool {
        RecommendationEngine::purchase(self, profile_id, item_id)
    }
}

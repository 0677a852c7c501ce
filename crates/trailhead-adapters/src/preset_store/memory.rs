//! In-memory preset store with the builtin presets.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use trailhead_core::{
    application::{
        ApplicationError,
        ports::{PresetInfo, PresetStore},
    },
    domain::OptionLayer,
    error::TrailheadResult,
};

use crate::builtin_presets;

#[derive(Debug, Clone)]
struct StoredPreset {
    description: String,
    layer: OptionLayer,
}

/// Thread-safe in-memory preset store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPresetStore {
    inner: Arc<RwLock<BTreeMap<String, StoredPreset>>>,
}

impl InMemoryPresetStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the builtin presets loaded.
    pub fn with_builtin() -> TrailheadResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    pub fn load_builtin(&self) -> TrailheadResult<()> {
        for preset in builtin_presets::all_presets() {
            self.insert(preset.name, preset.description, preset.layer)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PresetStore for InMemoryPresetStore {
    fn get(&self, name: &str) -> TrailheadResult<OptionLayer> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(name).map(|p| p.layer.clone()).ok_or_else(|| {
            ApplicationError::PresetNotFound {
                name: name.to_string(),
                available: inner.keys().cloned().collect(),
            }
            .into()
        })
    }

    fn list(&self) -> TrailheadResult<Vec<PresetInfo>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        Ok(inner
            .iter()
            .map(|(name, preset)| PresetInfo {
                name: name.clone(),
                description: preset.description.clone(),
                keys: preset.layer.keys().map(str::to_string).collect(),
            })
            .collect())
    }

    fn insert(&self, name: &str, description: &str, layer: OptionLayer) -> TrailheadResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.insert(
            name.to_string(),
            StoredPreset {
                description: description.to_string(),
                layer,
            },
        );
        Ok(())
    }
}

//! Preset Service - preset lookup and listing.
//!
//! Separated from generation so the CLI can list presets without resolving
//! anything.

use tracing::{debug, instrument};

use crate::{
    application::ports::{PresetInfo, PresetStore},
    domain::OptionLayer,
    error::TrailheadResult,
};

/// Preset applied when the caller names none.
pub const DEFAULT_PRESET: &str = "recommended";

/// Service for preset operations.
pub struct PresetService {
    store: Box<dyn PresetStore>,
}

impl PresetService {
    pub fn new(store: Box<dyn PresetStore>) -> Self {
        Self { store }
    }

    /// Layer for `name`, or the default preset when `None`.
    #[instrument(skip(self))]
    pub fn layer(&self, name: Option<&str>) -> TrailheadResult<OptionLayer> {
        let name = name.unwrap_or(DEFAULT_PRESET);
        let layer = self.store.get(name)?;
        debug!(preset = name, keys = layer.len(), "Preset loaded");
        Ok(layer)
    }

    pub fn save(&self, name: &str, description: &str, layer: OptionLayer) -> TrailheadResult<()> {
        self.store.insert(name, description, layer)
    }

    pub fn list(&self) -> TrailheadResult<Vec<PresetInfo>> {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockPresetStore};
    use crate::error::TrailheadError;
    use mockall::predicate::eq;

    #[test]
    fn missing_name_falls_back_to_recommended() {
        let mut store = MockPresetStore::new();
        store
            .expect_get()
            .with(eq("recommended"))
            .times(1)
            .returning(|_| Ok(OptionLayer::new().with("cSpellPath", ".cspell.json")));

        let layer = PresetService::new(Box::new(store)).layer(None).unwrap();
        assert!(layer.supplies("cSpellPath"));
    }

    #[test]
    fn unknown_preset_propagates() {
        let mut store = MockPresetStore::new();
        store.expect_get().returning(|name| {
            Err(ApplicationError::PresetNotFound {
                name: name.to_string(),
                available: vec!["none".into()],
            }
            .into())
        });

        let result = PresetService::new(Box::new(store)).layer(Some("strict"));
        assert!(matches!(
            result,
            Err(TrailheadError::Application(ApplicationError::PresetNotFound { .. }))
        ));
    }
}

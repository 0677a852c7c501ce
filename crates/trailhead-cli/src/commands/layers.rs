//! Turning flags and config into the preset and override layers.

use std::path::Path;

use tracing::{debug, instrument};

use trailhead_adapters::{InMemoryPresetStore, PresetDirectoryLoader, load_layer_file};
use trailhead_core::{
    application::PresetService,
    domain::{OptionLayer, keys},
};

use crate::{cli::LayerArgs, config::AppConfig, error::CliResult};

/// The two caller-controlled layers of one resolution.
#[derive(Debug)]
pub struct Layers {
    pub preset: OptionLayer,
    pub overrides: OptionLayer,
}

/// Builtin presets plus any found under `presets.local_path`.
pub fn preset_service(config: &AppConfig) -> CliResult<PresetService> {
    let store = InMemoryPresetStore::with_builtin()?;
    if let Some(dir) = &config.presets.local_path {
        if dir.is_dir() {
            let loaded = PresetDirectoryLoader::new(dir).load_into(&store)?;
            debug!(dir = %dir.display(), loaded, "Local presets loaded");
        } else {
            tracing::warn!(dir = %dir.display(), "presets.local_path is not a directory");
        }
    }
    Ok(PresetService::new(Box::new(store)))
}

/// Preset from `--preset` or `defaults.preset`; overrides from the options
/// file, then `name`, then the flags.
///
/// `--disable` is applied after `--enable`, so it wins for a feature named
/// by both.
#[instrument(skip_all)]
pub fn build(args: &LayerArgs, name: Option<&str>, config: &AppConfig) -> CliResult<Layers> {
    let preset_name = args.preset.as_deref().or(config.defaults.preset.as_deref());
    let preset = preset_service(config)?.layer(preset_name)?;

    let options_file = args
        .options_file
        .as_deref()
        .or(config.defaults.options_file.as_deref());
    let mut overrides = match options_file {
        Some(path) => read_options(path)?,
        None => OptionLayer::new(),
    };

    if let Some(name) = name {
        overrides.set(keys::NAME, name);
    }
    if let Some(description) = &args.description {
        overrides.set(keys::DESCRIPTION, description.as_str());
    }
    for feature in &args.enable {
        overrides.set(feature.key(), true);
    }
    for feature in &args.disable {
        overrides.set(feature.key(), false);
    }

    debug!(
        preset = preset_name.unwrap_or("(default)"),
        overrides = overrides.len(),
        "Layers built"
    );
    Ok(Layers { preset, overrides })
}

fn read_options(path: &Path) -> CliResult<OptionLayer> {
    let layer = load_layer_file(path)?;
    debug!(path = %path.display(), keys = layer.len(), "Options file loaded");
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trailhead_core::domain::Feature;

    #[test]
    fn flags_and_name_land_in_overrides() {
        let args = LayerArgs {
            description: Some("A widget".into()),
            enable: vec![Feature::Husky],
            disable: vec![Feature::Prettier],
            ..LayerArgs::default()
        };
        let layers = build(&args, Some("widget"), &AppConfig::default()).unwrap();

        assert_eq!(layers.overrides.get("name"), Some(&json!("widget")));
        assert_eq!(layers.overrides.get("description"), Some(&json!("A widget")));
        assert_eq!(layers.overrides.get("husky"), Some(&json!(true)));
        assert_eq!(layers.overrides.get("prettier"), Some(&json!(false)));
    }

    #[test]
    fn disable_wins_over_enable() {
        let args = LayerArgs {
            enable: vec![Feature::CSpell],
            disable: vec![Feature::CSpell],
            ..LayerArgs::default()
        };
        let layers = build(&args, None, &AppConfig::default()).unwrap();
        assert_eq!(layers.overrides.get("cSpell"), Some(&json!(false)));
        assert!(!layers.overrides.supplies("name"));
    }

    #[test]
    fn default_preset_is_recommended() {
        let layers = build(&LayerArgs::default(), None, &AppConfig::default()).unwrap();
        assert_eq!(
            layers.preset.get("cSpellPath"),
            Some(&json!(".cspell.json"))
        );
    }

    #[test]
    fn config_preset_applies_when_flag_absent() {
        let mut config = AppConfig::default();
        config.defaults.preset = Some("none".into());
        let layers = build(&LayerArgs::default(), None, &config).unwrap();
        assert!(layers.preset.is_empty());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let args = LayerArgs {
            preset: Some("strict".into()),
            ..LayerArgs::default()
        };
        let err = build(&args, None, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn options_file_sits_under_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.json");
        std::fs::write(&path, r#"{ "name": "from-file", "husky": false, "license": "MIT" }"#)
            .unwrap();

        let args = LayerArgs {
            options_file: Some(path),
            enable: vec![Feature::Husky],
            ..LayerArgs::default()
        };
        let layers = build(&args, Some("from-flag"), &AppConfig::default()).unwrap();

        assert_eq!(layers.overrides.get("name"), Some(&json!("from-flag")));
        assert_eq!(layers.overrides.get("husky"), Some(&json!(true)));
        assert_eq!(layers.overrides.get("license"), Some(&json!("MIT")));
    }

    #[test]
    fn local_presets_are_loaded_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("strict.toml"), "husky = false\n").unwrap();

        let mut config = AppConfig::default();
        config.presets.local_path = Some(dir.path().to_path_buf());
        let args = LayerArgs {
            preset: Some("strict".into()),
            ..LayerArgs::default()
        };
        let layers = build(&args, None, &config).unwrap();
        assert_eq!(layers.preset.get("husky"), Some(&json!(false)));
    }
}

//! Option layers from disk.
//!
//! An options file is a single JSON or TOML object whose top-level keys are
//! option keys. A preset directory holds one such file per preset; the file
//! stem is the preset name.
//!
//! ```text
//! presets/
//! ├── team.toml        ← preset "team"
//! └── library.json     ← preset "library"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use trailhead_core::{
    application::{ApplicationError, ports::PresetStore},
    domain::OptionLayer,
    error::TrailheadResult,
};

/// Why one file failed to become a layer.
#[derive(Debug, Error)]
pub enum LayerFileError {
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported extension '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("top level must be an object of option keys")]
    NotAnObject,
}

impl LayerFileError {
    fn at(self, path: &Path) -> ApplicationError {
        ApplicationError::LayerLoadFailed {
            path: path.to_path_buf(),
            reason: self.to_string(),
        }
    }
}

/// Parse one options file, choosing the format by extension.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_layer_file(path: &Path) -> TrailheadResult<OptionLayer> {
    let layer = parse_layer_file(path).map_err(|e| e.at(path))?;
    debug!(keys = layer.len(), "Options file loaded");
    Ok(layer)
}

fn parse_layer_file(path: &Path) -> Result<OptionLayer, LayerFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let raw = fs::read_to_string(path)?;
    parse_layer(&raw, &extension)
}

/// Parse layer text in the given format (`json` or `toml`).
pub fn parse_layer(raw: &str, format: &str) -> Result<OptionLayer, LayerFileError> {
    let value: Value = match format {
        "json" => serde_json::from_str(raw)?,
        "toml" => toml::from_str(raw)?,
        other => return Err(LayerFileError::UnsupportedFormat(other.to_string())),
    };
    OptionLayer::from_value(value).map_err(|_| LayerFileError::NotAnObject)
}

/// One preset read from a directory.
#[derive(Debug, Clone)]
pub struct LoadedPreset {
    pub name: String,
    pub path: PathBuf,
    pub layer: OptionLayer,
}

/// Loads every `*.json` / `*.toml` file directly under a directory as a
/// preset.
pub struct PresetDirectoryLoader {
    presets_dir: PathBuf,
}

impl PresetDirectoryLoader {
    pub fn new(presets_dir: impl Into<PathBuf>) -> Self {
        Self {
            presets_dir: presets_dir.into(),
        }
    }

    /// Load every valid preset file.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::LayerLoadFailed`] if the directory is
    /// missing or unreadable. Individual files that fail to parse are
    /// skipped with a `WARN` log.
    #[instrument(skip(self), fields(dir = %self.presets_dir.display()))]
    pub fn load_all(&self) -> TrailheadResult<Vec<LoadedPreset>> {
        if !self.presets_dir.is_dir() {
            return Err(ApplicationError::LayerLoadFailed {
                path: self.presets_dir.clone(),
                reason: "presets directory not found".into(),
            }
            .into());
        }

        let mut presets = Vec::new();
        let walker = WalkDir::new(&self.presets_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::LayerLoadFailed {
                path: self.presets_dir.clone(),
                reason: format!("directory walk error: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let is_layer = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("json" | "toml")
            );
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_layer {
                continue;
            }

            match parse_layer_file(path) {
                Ok(layer) => {
                    debug!(preset = name, "loaded preset");
                    presets.push(LoadedPreset {
                        name: name.to_string(),
                        path: path.to_path_buf(),
                        layer,
                    });
                }
                Err(e) => {
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping preset file due to load error"
                    );
                }
            }
        }

        debug!(count = presets.len(), "finished loading presets");
        Ok(presets)
    }

    /// Load every preset into `store`, replacing same-named entries.
    pub fn load_into(&self, store: &dyn PresetStore) -> TrailheadResult<usize> {
        let presets = self.load_all()?;
        let count = presets.len();
        for preset in presets {
            let description = format!("Loaded from {}", preset.path.display());
            store.insert(&preset.name, &description, preset.layer)?;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryPresetStore;
    use serde_json::json;
    use tempfile::TempDir;
    use trailhead_core::error::TrailheadError;

    #[test]
    fn parses_json_and_toml_alike() {
        let from_json = parse_layer(r#"{ "name": "widget", "husky": false }"#, "json").unwrap();
        let from_toml = parse_layer("name = \"widget\"\nhusky = false\n", "toml").unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn toml_tables_become_option_records() {
        let layer = parse_layer(
            "[cSpellOptions]\nlanguage = \"en-US\"\nwords = [\"trailhead\"]\n",
            "toml",
        )
        .unwrap();
        assert_eq!(
            layer.get("cSpellOptions"),
            Some(&json!({ "language": "en-US", "words": ["trailhead"] }))
        );
    }

    #[test]
    fn json_array_is_not_a_layer() {
        assert!(matches!(
            parse_layer("[1, 2]", "json"),
            Err(LayerFileError::NotAnObject)
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("options.yaml");
        fs::write(&path, "name: widget").unwrap();

        let err = load_layer_file(&path).unwrap_err();
        assert!(matches!(
            err,
            TrailheadError::Application(ApplicationError::LayerLoadFailed { .. })
        ));
        assert!(err.to_string().contains("unsupported extension"));
    }

    #[test]
    fn missing_presets_dir_is_an_error() {
        let loader = PresetDirectoryLoader::new("/absolutely/does/not/exist");
        assert!(loader.load_all().is_err());
    }

    #[test]
    fn directory_loader_skips_bad_and_foreign_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("team.toml"), "husky = false\n").unwrap();
        fs::write(temp.path().join("library.json"), r#"{ "docgen": true }"#).unwrap();
        fs::write(temp.path().join("broken.json"), "{ nope").unwrap();
        fs::write(temp.path().join("README.md"), "# presets").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let presets = PresetDirectoryLoader::new(temp.path()).load_all().unwrap();
        let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["library", "team"]);
    }

    #[test]
    fn load_into_registers_presets() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("team.toml"), "husky = false\n").unwrap();

        let store = InMemoryPresetStore::with_builtin().unwrap();
        let count = PresetDirectoryLoader::new(temp.path())
            .load_into(&store)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.get("team").unwrap().get("husky"), Some(&json!(false)));
    }
}

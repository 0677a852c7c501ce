//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `TRAILHEAD__SECTION__KEY` environment variables
//! 3. The config file (`--config FILE` or the per-user location)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Every key `config get` and `config set` accept.
pub const KNOWN_KEYS: [&str; 5] = [
    "defaults.preset",
    "defaults.options_file",
    "presets.local_path",
    "output.no_color",
    "output.format",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for `new` and `resolve`.
    pub defaults: Defaults,
    pub presets: PresetConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Preset used when `--preset` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Options file used when `--options` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Directory of extra `*.json` / `*.toml` presets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file at `config_file` (or the default
    /// location) and the environment.
    ///
    /// A missing file is an error only when `required`.
    pub fn load(config_file: Option<&PathBuf>, required: bool) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);
        Self::load_from(&path, required, "TRAILHEAD")
    }

    fn load_from(path: &Path, required: bool, env_prefix: &str) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// `--config` when given, otherwise [`Self::config_path`].
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Per-user configuration file, falling back to `.trailhead.toml` in the
    /// current directory when no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("au.com", "mountain-pass", "trailhead")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".trailhead.toml"))
    }

    /// Display value for one of [`KNOWN_KEYS`].
    pub fn get(&self, key: &str) -> Option<String> {
        let display = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        match key {
            "defaults.preset" => Some(self.defaults.preset.clone().unwrap_or_default()),
            "defaults.options_file" => Some(display(&self.defaults.options_file)),
            "presets.local_path" => Some(display(&self.presets.local_path)),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }
}

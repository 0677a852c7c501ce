//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `trailhead-adapters` crate provides implementations.

use serde_json::Value;
use std::path::Path;

use crate::domain::{
    Dependency, GeneratedFile, LinterConfig, OptionLayer, ProjectStructure, RelativePath, Task,
};
use crate::error::TrailheadResult;

/// Port for the project model the planner feeds.
///
/// Implemented by:
/// - `trailhead_adapters::project::InMemoryProject`
///
/// Every call is an in-memory intent; nothing touches disk until the
/// synthesized [`ProjectStructure`] is handed to a [`Filesystem`].
pub trait ProjectModel {
    fn add_dev_dependency(&mut self, dependency: Dependency);

    fn add_task(&mut self, task: Task);

    /// Register a file. A later registration at the same path replaces it.
    fn register_file(&mut self, file: GeneratedFile);

    fn register_json_file(&mut self, path: RelativePath, content: Value) {
        self.register_file(GeneratedFile::json(path, content));
    }

    /// Switch the linting subsystem on. Idempotent.
    fn enable_linter(&mut self);

    /// Linter handle, `None` when the linting subsystem is off.
    fn linter(&mut self) -> Option<&mut LinterConfig>;

    fn linter_enabled(&self) -> bool;

    /// Set a top-level package manifest field, replacing any earlier value.
    fn override_manifest_field(&mut self, field: &str, value: Value);

    fn set_readme(&mut self, contents: &str);

    /// Render every registered intent into files under `root`.
    fn synthesize(&self, root: &Path) -> TrailheadResult<ProjectStructure>;
}

/// Summary of one preset for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetInfo {
    pub name: String,
    pub description: String,
    /// Option keys the preset sets.
    pub keys: Vec<String>,
}

/// Port for named option layers.
///
/// Implemented by:
/// - `trailhead_adapters::preset_store::InMemoryPresetStore`
#[cfg_attr(test, mockall::automock)]
pub trait PresetStore: Send + Sync {
    /// Get a preset layer by name.
    fn get(&self, name: &str) -> TrailheadResult<OptionLayer>;

    /// List all available presets, sorted by name.
    fn list(&self) -> TrailheadResult<Vec<PresetInfo>>;

    /// Insert or replace a preset.
    fn insert(&self, name: &str, description: &str, layer: OptionLayer) -> TrailheadResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `trailhead_adapters::filesystem::LocalFilesystem` (production)
/// - `trailhead_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths handed in are already joined onto the project root
/// - Permissions are capability-based, not Unix-specific
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TrailheadResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> TrailheadResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> TrailheadResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> TrailheadResult<()>;
}

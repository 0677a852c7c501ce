//! Infrastructure adapters for Trailhead.
//!
//! This crate implements the ports defined in
//! `trailhead-core::application::ports`. It contains all I/O: the local
//! filesystem, option files on disk, and the in-memory project model.

pub mod builtin_presets;
pub mod filesystem;
pub mod layer_loader;
pub mod preset_store;
pub mod project;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use layer_loader::{PresetDirectoryLoader, load_layer_file};
pub use preset_store::InMemoryPresetStore;
pub use project::InMemoryProject;

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "write it to disk".

pub mod generator;
pub mod preset_service;
pub mod scaffold_service;

pub use generator::ProjectGenerator;
pub use preset_service::{DEFAULT_PRESET, PresetService};
pub use scaffold_service::{ScaffoldService, WriteOptions, WriteSummary};

//! Application layer for Trailhead.
//!
//! This layer contains:
//! - **Planner**: The fixed rule sequence that turns a resolved
//!   configuration into project-model intents
//! - **Services**: Use case orchestration (ProjectGenerator, ScaffoldService,
//!   PresetService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Resolution rules live in `crate::domain`.

pub mod error;
pub mod planner;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use planner::{ArtifactPlanner, PlanReport, Rule};
pub use services::{
    DEFAULT_PRESET, PresetService, ProjectGenerator, ScaffoldService, WriteOptions, WriteSummary,
};

pub use ports::{Filesystem, PresetInfo, PresetStore, ProjectModel};

pub use error::ApplicationError;

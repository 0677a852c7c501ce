//! Trailhead Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Trailhead:
//! option resolution for generated JavaScript/TypeScript projects and the
//! planner that decides which tooling artifacts they receive.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trailhead-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectGenerator, ScaffoldService, ..) │
//! │    ArtifactPlanner rule sequence        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ProjectModel, PresetStore, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    trailhead-adapters (Infrastructure)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (OptionLayer, resolve, LinterConfig)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trailhead_core::prelude::*;
//!
//! let overrides = OptionLayer::new().with("name", "widget");
//! let mut generator =
//!     ProjectGenerator::new(&builtin_defaults(), &preset, &overrides, project)?;
//! generator.add_contributors(["Ann"]);
//! let structure = generator.emit(Path::new("./widget"))?;
//! ScaffoldService::new(filesystem).write(&structure, WriteOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactPlanner, PlanReport, PresetService, ProjectGenerator, ScaffoldService,
        WriteOptions, WriteSummary,
        ports::{Filesystem, PresetInfo, PresetStore, ProjectModel},
    };
    pub use crate::domain::{
        Dependency, Feature, GeneratedFile, LinterConfig, OptionLayer, ProjectStructure,
        ResolvedConfiguration, Task, builtin_defaults, keys, merge_layers, resolve,
    };
    pub use crate::error::{TrailheadError, TrailheadResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

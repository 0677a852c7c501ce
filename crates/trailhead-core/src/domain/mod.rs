// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Trailhead.
//!
//! Pure option resolution and the data the planner produces. All I/O and the
//! project model itself live behind ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Decisions are logged by the application layer
//! - **Value semantics**: Domain objects are Clone + PartialEq
//! - **Fresh defaults**: Builtin defaults are rebuilt per resolution
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layers;
pub mod resolver;
pub mod value_objects;

mod validation;

pub use entities::{
    artifact::{FileContent, GeneratedFile, Task, fixed_paths},
    configuration::{ArtifactPaths, Author, FeatureFlags, FeatureOptions, ResolvedConfiguration},
    linter::{FileOverride, LinterConfig},
    project_structure::{FileToWrite, ProjectStructure},
};

pub use error::{DomainError, ErrorCategory};
pub use layers::{OptionLayer, builtin_defaults, keys, merge_layers};
pub use resolver::resolve;
pub use value_objects::{Dependency, Feature};

pub use entities::common::{Permissions, RelativePath};
pub use validation::DomainValidator;

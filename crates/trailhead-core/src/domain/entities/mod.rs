pub mod artifact;
pub mod common;
pub mod configuration;
pub mod linter;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use artifact::{GeneratedFile, Task};
pub use configuration::ResolvedConfiguration;
pub use linter::LinterConfig;
pub use project_structure::ProjectStructure;

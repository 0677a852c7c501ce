// ============================================================================
// domain/error.rs - RESOLUTION AND ARTIFACT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the generator unchanged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Option '{key}' must be {expected}")]
    InvalidOption { key: String, expected: &'static str },

    #[error("Option layer must be a JSON object, found {found}")]
    InvalidLayer { found: &'static str },

    #[error("Invalid dependency specifier '{spec}'")]
    InvalidDependency { spec: String },

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Option '{key}' points at '{path}', which another artifact already uses")]
    ConflictingArtifactPath { key: &'static str, path: String },

    #[error("Project structure is empty")]
    EmptyStructure,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("The '{}' option was not set by any layer", field),
                format!("Pass it explicitly, e.g. --{} my-project", field),
                "Or add it to the options file given with --options".into(),
            ],
            Self::InvalidOption { key, expected } => vec![
                format!("'{}' has the wrong type; it must be {}", key, expected),
                "Check the options file and any preset that sets it".into(),
            ],
            Self::InvalidLayer { found } => vec![
                format!("An options file contained {} at the top level", found),
                "Options files must hold a single object of option keys".into(),
            ],
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesRoot { path } => vec![
                format!("'{}' must stay inside the generated project", path),
                "Use a path relative to the project root, e.g. .vscode/extensions.json".into(),
            ],
            Self::ConflictingArtifactPath { key, path } => vec![
                format!("Choose a different '{}'; '{}' is taken", key, path),
                "package.json, README.md, .eslintrc.json, .commitlintrc.json and the .husky hooks are reserved".into(),
                "vscodeExtensionsPath and cSpellPath must also differ from each other".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidOption { .. }
            | Self::InvalidLayer { .. }
            | Self::InvalidDependency { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::ConflictingArtifactPath { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::EmptyStructure => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

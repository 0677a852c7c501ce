//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// No preset registered under that name.
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String, available: Vec<String> },

    /// An options file or preset file could not be read or parsed.
    #[error("Failed to load options from {path}: {reason}")]
    LayerLoadFailed { path: PathBuf, reason: String },

    /// The project model could not produce its file set.
    #[error("Project synthesis failed: {reason}")]
    SynthesisFailed { reason: String },

    /// Preset store access failed (lock poisoned).
    #[error("Preset store lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it (sample files are kept)".into(),
                "Choose a different --output directory".into(),
            ],
            Self::PresetNotFound { available, .. } => {
                let mut hints = vec!["Try: trailhead presets to see available presets".into()];
                if !available.is_empty() {
                    hints.push(format!("Available: {}", available.join(", ")));
                }
                hints
            }
            Self::LayerLoadFailed { path, .. } => vec![
                format!("Check the file at {}", path.display()),
                "Options files must be a JSON or TOML object of option keys".into(),
            ],
            Self::LockPoisoned => vec![
                "The preset store is locked".into(),
                "Try again in a moment".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PresetNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::LayerLoadFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. }
            | Self::RollbackFailed { .. }
            | Self::SynthesisFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

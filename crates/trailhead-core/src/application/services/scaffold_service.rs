//! Scaffold Service - writes an emitted project to disk.
//!
//! This service coordinates the write half of generation:
//! 1. Validate the synthesized structure
//! 2. Refuse an existing root unless forced
//! 3. Write every file, keeping sample files the user already owns
//! 4. Roll back a fresh root on failure

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, ProjectStructure},
    error::TrailheadResult,
};

/// Options for one write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write into an existing directory.
    pub force: bool,
}

/// What a write touched, as slash-separated paths relative to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: Vec<String>,
    /// Sample files left alone because they already existed.
    pub skipped: Vec<String>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `structure` under its root.
    #[instrument(skip_all, fields(root = %structure.root().display(), force = options.force))]
    pub fn write(
        &self,
        structure: &ProjectStructure,
        options: WriteOptions,
    ) -> TrailheadResult<WriteSummary> {
        validator::validate_project_structure(structure)?;

        let root = structure.root();
        let existed = self.filesystem.exists(root);
        if existed && !options.force {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(summary) => {
                info!(
                    written = summary.written.len(),
                    skipped = summary.skipped.len(),
                    "Successfully wrote project"
                );
                Ok(summary)
            }
            Err(e) => {
                if existed {
                    warn!("Write failed inside an existing directory; leaving it in place");
                } else {
                    warn!("Write failed, attempting rollback");
                    self.rollback(root);
                }
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(&self, structure: &ProjectStructure) -> TrailheadResult<WriteSummary> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        let mut summary = WriteSummary::default();
        for file in structure.files() {
            let path = root.join(file.path.as_path());
            let rel = file.path.to_slash_string();

            if file.sample && self.filesystem.exists(&path) {
                debug!(path = %rel, "Sample file exists, skipping");
                summary.skipped.push(rel);
                continue;
            }

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            if file.permissions.executable_flag() {
                self.filesystem.set_permissions(&path, true)?;
            }
            summary.written.push(rel);
        }

        Ok(summary)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

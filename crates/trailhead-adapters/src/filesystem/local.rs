//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use trailhead_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{TrailheadError, TrailheadResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrailheadResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TrailheadResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> TrailheadResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = if executable {
                perms.mode() | 0o111
            } else {
                perms.mode() & !0o111
            };
            perms.set_mode(mode);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit outside unix.
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> TrailheadResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> TrailheadError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_nested_file() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join(".husky");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("pre-commit"), "#!/bin/sh\n").unwrap();

        assert!(fs.exists(&dir.join("pre-commit")));
        assert_eq!(
            std::fs::read_to_string(dir.join("pre-commit")).unwrap(),
            "#!/bin/sh\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn sets_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let hook = temp.path().join("commit-msg");
        fs.write_file(&hook, "#!/bin/sh\n").unwrap();
        fs.set_permissions(&hook, true).unwrap();

        let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn write_into_missing_directory_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&temp.path().join("missing/package.json"), "{}")
            .unwrap_err();
        assert!(matches!(
            err,
            TrailheadError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn remove_dir_all_clears_tree() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = temp.path().join("widget");
        fs.create_dir_all(&root.join(".vscode")).unwrap();
        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}

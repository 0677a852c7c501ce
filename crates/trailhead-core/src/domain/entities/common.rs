use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::domain::error::DomainError;

/// A project path guaranteed to be **relative** and to stay inside the root.
///
/// Generated artifacts are registered against the project root; an absolute
/// path or a `..` segment would let an option file write anywhere on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a relative path from a literal known to be valid.
    ///
    /// # Panics
    /// Panics if the path is absolute or climbs out of the root. Use
    /// [`RelativePath::try_new`] for caller-supplied paths.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("invalid RelativePath: {e}"),
        }
    }

    /// Validate and wrap a path.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.is_absolute() || display.starts_with('/') || display.starts_with('\\') {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }

        let mut depth: usize = 0;
        for component in path.components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::CurDir => {}
                Component::ParentDir => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| DomainError::PathEscapesRoot {
                            path: display.clone(),
                        })?;
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: display });
                }
            }
        }
        if depth == 0 {
            return Err(DomainError::PathEscapesRoot { path: display });
        }

        Ok(Self(path))
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Forward-slash form, stable across platforms.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        RelativePath::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_slash_string())
    }
}

/// Simplified permission model for generated artifacts.
///
/// This is a **capability model**, not a Unix permission model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    writable: bool,
    executable: bool,
}

impl Permissions {
    /// Read-only permissions (sample files the user owns after creation).
    pub const fn read_only() -> Self {
        Self {
            writable: false,
            executable: false,
        }
    }

    /// Read and write permissions.
    pub const fn read_write() -> Self {
        Self {
            writable: true,
            executable: false,
        }
    }

    /// Read and execute permissions (git hooks).
    pub const fn executable() -> Self {
        Self {
            writable: false,
            executable: true,
        }
    }

    pub const fn writable(&self) -> bool {
        self.writable
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

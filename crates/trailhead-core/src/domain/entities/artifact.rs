//! Artifacts the planner registers against a project model.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::common::{Permissions, RelativePath};

/// Paths owned by the generator itself. Configurable artifact paths may not
/// reuse any of them.
pub mod fixed_paths {
    pub const MANIFEST: &str = "package.json";
    pub const LINTER: &str = ".eslintrc.json";
    pub const README: &str = "README.md";
    pub const COMMITLINT_CONFIG: &str = ".commitlintrc.json";
    pub const PRE_COMMIT: &str = ".husky/pre-commit";
    pub const COMMIT_MSG: &str = ".husky/commit-msg";

    pub const ALL: [&str; 6] = [MANIFEST, LINTER, README, COMMITLINT_CONFIG, PRE_COMMIT, COMMIT_MSG];
}

/// Body of a generated file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FileContent {
    /// Lines joined with `\n`, terminated by a final newline.
    Lines(Vec<String>),
    /// Written byte-for-byte.
    Raw(String),
    /// Pretty-printed with two-space indentation and a final newline.
    Json(Value),
}

impl FileContent {
    pub fn render(&self) -> String {
        match self {
            Self::Lines(lines) => {
                let mut out = lines.join("\n");
                out.push('\n');
                out
            }
            Self::Raw(text) => text.clone(),
            Self::Json(value) => {
                // Serializing a `Value` cannot fail: every key is a string.
                let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
                out.push('\n');
                out
            }
        }
    }
}

/// A file registered for materialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    path: RelativePath,
    content: FileContent,
    #[serde(skip)]
    permissions: Permissions,
    /// Written once; an existing file on disk is left untouched.
    sample: bool,
}

impl GeneratedFile {
    /// A managed text file, rewritten on every generation.
    pub fn lines<I, S>(path: RelativePath, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path,
            content: FileContent::Lines(lines.into_iter().map(Into::into).collect()),
            permissions: Permissions::read_write(),
            sample: false,
        }
    }

    /// A managed JSON file.
    pub fn json(path: RelativePath, value: Value) -> Self {
        Self {
            path,
            content: FileContent::Json(value),
            permissions: Permissions::read_write(),
            sample: false,
        }
    }

    /// A sample file: created if absent and then owned by the user.
    pub fn sample(path: RelativePath, contents: impl Into<String>) -> Self {
        Self {
            path,
            content: FileContent::Raw(contents.into()),
            permissions: Permissions::read_only(),
            sample: true,
        }
    }

    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    pub fn is_executable(&self) -> bool {
        self.permissions.executable_flag()
    }

    pub fn is_sample(&self) -> bool {
        self.sample
    }

    pub fn render(&self) -> String {
        self.content.render()
    }
}

/// A named project task (surfaced as a package script).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    pub command: String,
    pub description: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            description: description.into(),
        }
    }
}

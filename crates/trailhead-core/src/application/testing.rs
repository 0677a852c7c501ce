//! Test doubles shared by the application layer's unit tests.

use serde_json::{Map, Value};
use std::path::Path;

use crate::{
    application::ports::ProjectModel,
    domain::{
        Dependency, FileToWrite, GeneratedFile, LinterConfig, OptionLayer, ProjectStructure,
        ResolvedConfiguration, Task, builtin_defaults, keys, resolve,
    },
    error::TrailheadResult,
};

/// Records every intent without deduplicating anything except by key.
#[derive(Debug, Default)]
pub struct RecordingProject {
    pub dependencies: Vec<Dependency>,
    pub tasks: Vec<Task>,
    pub files: Vec<GeneratedFile>,
    pub linter: Option<LinterConfig>,
    pub manifest: Map<String, Value>,
    pub readme: Option<String>,
}

impl RecordingProject {
    pub fn with_linter() -> Self {
        Self {
            linter: Some(LinterConfig::new()),
            ..Self::default()
        }
    }

    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path().to_slash_string() == path)
    }

    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies.iter().map(|d| d.name().to_string()).collect()
    }
}

impl ProjectModel for RecordingProject {
    fn add_dev_dependency(&mut self, dependency: Dependency) {
        self.dependencies.retain(|d| d.name() != dependency.name());
        self.dependencies.push(dependency);
    }

    fn add_task(&mut self, task: Task) {
        self.tasks.retain(|t| t.name != task.name);
        self.tasks.push(task);
    }

    fn register_file(&mut self, file: GeneratedFile) {
        self.files.retain(|f| f.path() != file.path());
        self.files.push(file);
    }

    fn enable_linter(&mut self) {
        self.linter.get_or_insert_with(LinterConfig::new);
    }

    fn linter(&mut self) -> Option<&mut LinterConfig> {
        self.linter.as_mut()
    }

    fn linter_enabled(&self) -> bool {
        self.linter.is_some()
    }

    fn override_manifest_field(&mut self, field: &str, value: Value) {
        self.manifest.insert(field.to_string(), value);
    }

    fn set_readme(&mut self, contents: &str) {
        self.readme = Some(contents.to_string());
    }

    fn synthesize(&self, root: &Path) -> TrailheadResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(root);
        for file in &self.files {
            structure.add_file(FileToWrite::new(file.path().clone(), file.render()));
        }
        Ok(structure)
    }
}

/// Resolve against the builtin defaults with `name = "widget"` plus `extra`.
pub fn config_with(extra: &[(&str, Value)]) -> ResolvedConfiguration {
    let mut overrides = OptionLayer::new().with(keys::NAME, "widget");
    for (key, value) in extra {
        overrides.set(*key, value.clone());
    }
    resolve(&builtin_defaults(), &OptionLayer::new(), &overrides).unwrap()
}

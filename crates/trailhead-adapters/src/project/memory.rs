//! In-memory project model.
//!
//! Collects planner intents keyed the way a package manager would key them
//! and renders them into a [`ProjectStructure`] on demand.

use std::{collections::BTreeMap, path::Path};

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use trailhead_core::{
    application::{ApplicationError, ports::ProjectModel},
    domain::{
        Dependency, FileToWrite, GeneratedFile, LinterConfig, ProjectStructure, RelativePath,
        Task, fixed_paths,
    },
    error::TrailheadResult,
};

const MANIFEST_PATH: &str = fixed_paths::MANIFEST;
const LINTER_PATH: &str = fixed_paths::LINTER;
const README_PATH: &str = fixed_paths::README;

/// Project model backed by plain collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProject {
    dependencies: BTreeMap<String, Dependency>,
    tasks: Vec<Task>,
    files: BTreeMap<RelativePath, GeneratedFile>,
    linter: Option<LinterConfig>,
    manifest: Map<String, Value>,
    readme: String,
}

impl InMemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dev dependencies sorted by name.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.values()
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Registered files sorted by path.
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.values()
    }

    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.values().find(|f| f.path().to_slash_string() == path)
    }

    pub fn linter_config(&self) -> Option<&LinterConfig> {
        self.linter.as_ref()
    }

    pub fn manifest_field(&self, field: &str) -> Option<&Value> {
        self.manifest.get(field)
    }

    pub fn readme(&self) -> &str {
        &self.readme
    }

    /// `package.json` document: manifest overrides in insertion order, then
    /// the collected dependencies and scripts unless a caller overrode them.
    pub fn manifest(&self) -> Value {
        let mut manifest = self.manifest.clone();
        if !self.dependencies.is_empty() && !manifest.contains_key("devDependencies") {
            let deps: Map<String, Value> = self
                .dependencies
                .values()
                .map(|d| (d.name().to_string(), Value::from(d.version_or_any())))
                .collect();
            manifest.insert("devDependencies".into(), Value::Object(deps));
        }
        if !self.tasks.is_empty() && !manifest.contains_key("scripts") {
            let scripts: Map<String, Value> = self
                .tasks
                .iter()
                .map(|t| (t.name.clone(), Value::from(t.command.as_str())))
                .collect();
            manifest.insert("scripts".into(), Value::Object(scripts));
        }
        Value::Object(manifest)
    }
}

impl ProjectModel for InMemoryProject {
    fn add_dev_dependency(&mut self, dependency: Dependency) {
        debug!(dependency = %dependency, "Dev dependency registered");
        self.dependencies
            .insert(dependency.name().to_string(), dependency);
    }

    fn add_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.name == task.name) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    fn register_file(&mut self, file: GeneratedFile) {
        debug!(path = %file.path(), sample = file.is_sample(), "File registered");
        self.files.insert(file.path().clone(), file);
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
        self.readme = contents.to_string();
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    fn synthesize(&self, root: &Path) -> TrailheadResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(root);

        structure.add_file(FileToWrite::new(
            RelativePath::try_new(MANIFEST_PATH)?,
            pretty_json(&self.manifest())?,
        ));
        if let Some(linter) = &self.linter {
            structure.add_file(FileToWrite::new(
                RelativePath::try_new(LINTER_PATH)?,
                pretty_json(&linter.to_json())?,
            ));
        }
        structure.add_file(FileToWrite::new(
            RelativePath::try_new(README_PATH)?,
            format!("{}\n", self.readme),
        ));

        for file in self.files.values() {
            structure.add_file(to_write(file));
        }

        debug!(files = structure.file_count(), "Synthesized");
        Ok(structure)
    }
}

fn to_write(file: &GeneratedFile) -> FileToWrite {
    FileToWrite {
        path: file.path().clone(),
        content: file.render(),
        permissions: file.permissions(),
        sample: file.is_sample(),
    }
}

fn pretty_json(value: &Value) -> TrailheadResult<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| {
        ApplicationError::SynthesisFailed {
            reason: e.to_string(),
        }
    })?;
    out.push('\n');
    Ok(out)
}

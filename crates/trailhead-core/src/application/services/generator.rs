//! Project generator - one generation run from option layers to files.
//!
//! Lifecycle:
//! 1. `new` resolves the layers, seeds the manifest and README, and runs the
//!    planner. Resolution failures abort before the project model sees any
//!    intent.
//! 2. `add_contributors` may be called any number of times.
//! 3. `emit` writes the contributors field and synthesizes the files. It can
//!    be called repeatedly; each call reflects the current state.

use serde_json::{Value, json};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        planner::{ArtifactPlanner, PlanReport, apply_contributors},
        ports::ProjectModel,
    },
    domain::{
        DomainValidator as validator, Feature, OptionLayer, ProjectStructure,
        ResolvedConfiguration, resolve,
    },
    error::TrailheadResult,
};

pub struct ProjectGenerator<P: ProjectModel> {
    config: ResolvedConfiguration,
    project: P,
    report: PlanReport,
}

impl<P: ProjectModel> ProjectGenerator<P> {
    /// Resolve and plan with the standard rule sequence.
    pub fn new(
        defaults: &OptionLayer,
        preset: &OptionLayer,
        overrides: &OptionLayer,
        project: P,
    ) -> TrailheadResult<Self> {
        Self::with_planner(
            defaults,
            preset,
            overrides,
            project,
            &ArtifactPlanner::standard(),
        )
    }

    #[instrument(skip_all)]
    pub fn with_planner(
        defaults: &OptionLayer,
        preset: &OptionLayer,
        overrides: &OptionLayer,
        mut project: P,
        planner: &ArtifactPlanner,
    ) -> TrailheadResult<Self> {
        let config = resolve(defaults, preset, overrides)?;
        validator::validate_configuration(&config)?;
        info!(project = %config.name(), package = %config.package_name(), "Configuration resolved");

        seed_project(&config, &mut project);
        let report = planner.plan(&config, &mut project)?;
        debug!(applied = ?report.applied, skipped = ?report.skipped, "Plan complete");

        Ok(Self {
            config,
            project,
            report,
        })
    }

    /// Append contributors in call order. Duplicates are kept.
    pub fn add_contributors<I, S>(&mut self, contributors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.add_contributors(contributors);
    }

    /// Re-derive the contributors field and synthesize every file under
    /// `root`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn emit(&mut self, root: &Path) -> TrailheadResult<ProjectStructure> {
        apply_contributors(&self.config, &mut self.project);
        let structure = self.project.synthesize(root)?;
        validator::validate_project_structure(&structure)?;
        info!(files = structure.file_count(), "Project emitted");
        Ok(structure)
    }

    pub fn config(&self) -> &ResolvedConfiguration {
        &self.config
    }

    pub fn report(&self) -> &PlanReport {
        &self.report
    }

    pub fn project(&self) -> &P {
        &self.project
    }

    pub fn into_project(self) -> P {
        self.project
    }
}

/// Manifest fields and README that exist regardless of flags.
fn seed_project(config: &ResolvedConfiguration, project: &mut dyn ProjectModel) {
    project.override_manifest_field("name", Value::from(config.package_name()));
    if let Some(description) = config.description() {
        project.override_manifest_field("description", Value::from(description));
    }
    project.override_manifest_field(
        "repository",
        json!({ "type": "git", "url": config.repository_url() }),
    );
    project.override_manifest_field("homepage", Value::from(config.homepage_url()));
    project.override_manifest_field("bugs", json!({ "url": config.issues_url() }));
    if let Some(license) = config.license() {
        project.override_manifest_field("license", Value::from(license));
    }
    if let Some(author) = config.author().to_manifest_value() {
        project.override_manifest_field("author", author);
    }
    project.set_readme(config.readme_content());

    if config.is_enabled(Feature::Eslint) {
        project.enable_linter();
    }
}

//! The standard generation rules, one struct per rule.
//!
//! Every rule is idempotent against the same project model: dependencies,
//! tasks and files are keyed by name or path, and linter mutations are
//! set-like.

use serde_json::{Map, Value, json};

use crate::{
    application::{ApplicationError, ports::ProjectModel},
    domain::{
        Feature, FileOverride, GeneratedFile, RelativePath, ResolvedConfiguration, Task,
        fixed_paths,
    },
    error::TrailheadResult,
};

/// One step of the planner sequence.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the rule fires for this configuration and project.
    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool;

    fn apply(
        &self,
        config: &ResolvedConfiguration,
        project: &mut dyn ProjectModel,
    ) -> TrailheadResult<()>;
}

const HUSKY_HEADER: [&str; 2] = ["#!/bin/sh", r#". "$(dirname "$0")/_/husky.sh""#];
const COMMIT_MSG_COMMAND: &str = r#"npx --no -- commitlint --edit "${1}""#;

pub const PRE_COMMIT_PATH: &str = fixed_paths::PRE_COMMIT;
pub const COMMIT_MSG_PATH: &str = fixed_paths::COMMIT_MSG;
pub const COMMITLINT_CONFIG_PATH: &str = fixed_paths::COMMITLINT_CONFIG;

fn add_dev_dependencies(project: &mut dyn ProjectModel, specs: &[&str]) -> TrailheadResult<()> {
    for spec in specs {
        project.add_dev_dependency(spec.parse()?);
    }
    Ok(())
}

/// Two-space JSON without a trailing newline, the form sample files are
/// written in.
fn sample_json(options: &Map<String, Value>) -> TrailheadResult<String> {
    serde_json::to_string_pretty(options).map_err(|e| {
        ApplicationError::SynthesisFailed {
            reason: e.to_string(),
        }
        .into()
    })
}

/// The flag is on and, for lint flags, the project has a linter.
fn feature_triggered(
    feature: Feature,
    config: &ResolvedConfiguration,
    project: &dyn ProjectModel,
) -> bool {
    config.is_enabled(feature) && (!feature.requires_linter() || project.linter_enabled())
}

// ── 0. documentation generator ───────────────────────────────────────────────

pub struct DocgenRule;

impl Rule for DocgenRule {
    fn name(&self) -> &'static str {
        "docgen"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::Docgen, config, project)
    }

    fn apply(&self, _: &ResolvedConfiguration, project: &mut dyn ProjectModel) -> TrailheadResult<()> {
        add_dev_dependencies(project, &["typedoc@^0.22.15"])
    }
}

// ── 1. editor extension recommendations ──────────────────────────────────────

pub struct VscodeExtensionsRule;

impl Rule for VscodeExtensionsRule {
    fn name(&self) -> &'static str {
        "vscode-extensions"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::VscodeExtensions, config, project)
    }

    fn apply(
        &self,
        config: &ResolvedConfiguration,
        project: &mut dyn ProjectModel,
    ) -> TrailheadResult<()> {
        let contents = sample_json(&config.options().vscode_extensions_options)?;
        project.register_file(GeneratedFile::sample(
            config.paths().vscode_extensions.clone(),
            contents,
        ));
        Ok(())
    }
}

// ── 2. spell check ───────────────────────────────────────────────────────────

pub struct CSpellRule;

impl Rule for CSpellRule {
    fn name(&self) -> &'static str {
        "cspell"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::CSpell, config, project)
    }

    fn apply(
        &self,
        config: &ResolvedConfiguration,
        project: &mut dyn ProjectModel,
    ) -> TrailheadResult<()> {
        add_dev_dependencies(project, &["cspell"])?;
        let contents = sample_json(&config.options().cspell_options)?;
        project.register_file(GeneratedFile::sample(config.paths().cspell.clone(), contents));
        Ok(())
    }
}

// ── 3. git hooks ─────────────────────────────────────────────────────────────

pub struct HuskyRule;

impl Rule for HuskyRule {
    fn name(&self) -> &'static str {
        "husky"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::Husky, config, project)
    }

    fn apply(
        &self,
        config: &ResolvedConfiguration,
        project: &mut dyn ProjectModel,
    ) -> TrailheadResult<()> {
        add_dev_dependencies(project, &["husky"])?;
        project.add_task(Task::new("prepare", "husky install", "installs husky"));

        let lines = HUSKY_HEADER
            .iter()
            .map(|line| (*line).to_string())
            .chain(config.pre_commit_commands().iter().cloned());
        project.register_file(
            GeneratedFile::lines(RelativePath::try_new(PRE_COMMIT_PATH)?, lines).executable(),
        );
        Ok(())
    }
}

// ── 4. commit message lint ───────────────────────────────────────────────────

pub struct CommitlintRule;

impl Rule for CommitlintRule {
    fn name(&self) -> &'static str {
        "commitlint"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::Commitlint, config, project)
    }

    fn apply(
        &self,
        config: &ResolvedConfiguration,
        project: &mut dyn ProjectModel,
    ) -> TrailheadResult<()> {
        add_dev_dependencies(project, &["@commitlint/config-conventional", "@commitlint/cli"])?;
        project.register_json_file(
            RelativePath::try_new(COMMITLINT_CONFIG_PATH)?,
            Value::Object(config.options().commitlint_options.clone()),
        );

        // The hook only makes sense when husky installs the hook runtime.
        if config.is_enabled(Feature::Husky) {
            let lines = HUSKY_HEADER.iter().copied().chain([COMMIT_MSG_COMMAND]);
            project.register_file(
                GeneratedFile::lines(RelativePath::try_new(COMMIT_MSG_PATH)?, lines).executable(),
            );
        }
        Ok(())
    }
}

// ── 5. JSDoc lint ────────────────────────────────────────────────────────────

pub struct JsdocRule;

impl JsdocRule {
    fn rules() -> Vec<(&'static str, Value)> {
        vec![
            (
                "jsdoc/require-jsdoc",
                json!([
                    "error",
                    {
                        "contexts": [
                            "TSInterfaceDeclaration",
                            "TSTypeAliasDeclaration",
                            "TSEnumDeclaration",
                            "PropertyDeclaration",
                            "ClassProperty",
                            "ClassDeclaration",
                            "MethodDefinition",
                        ]
                    }
                ]),
            ),
            (
                "jsdoc/require-description",
                json!(["error", { "contexts": ["any"] }]),
            ),
            ("jsdoc/check-indentation", json!("error")),
            ("jsdoc/check-line-alignment", json!("error")),
            ("jsdoc/check-syntax", json!("error")),
            ("jsdoc/require-asterisk-prefix", json!("error")),
            // Types come from the type checker.
            ("jsdoc/require-param-type", json!("off")),
            ("jsdoc/require-param-description", json!("error")),
            ("jsdoc/require-returns-type", json!("off")),
        ]
    }
}

impl Rule for JsdocRule {
    fn name(&self) -> &'static str {
        "eslint-jsdoc"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::EslintJsdoc, config, project)
    }

    fn apply(&self, _: &ResolvedConfiguration, project: &mut dyn ProjectModel) -> TrailheadResult<()> {
        add_dev_dependencies(project, &["eslint-plugin-jsdoc", "eslint-plugin-jsdoc-typescript"])?;
        let Some(linter) = project.linter() else {
            return Ok(());
        };
        linter.add_plugin("jsdoc");
        linter.add_extension("plugin:jsdoc/recommended");
        linter.add_rules(Self::rules());
        Ok(())
    }
}

// ── 6. unicorn lint ──────────────────────────────────────────────────────────

pub struct UnicornRule;

impl Rule for UnicornRule {
    fn name(&self) -> &'static str {
        "eslint-unicorn"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::EslintUnicorn, config, project)
    }

    fn apply(&self, _: &ResolvedConfiguration, project: &mut dyn ProjectModel) -> TrailheadResult<()> {
        add_dev_dependencies(project, &["eslint-plugin-unicorn"])?;
        let Some(linter) = project.linter() else {
            return Ok(());
        };
        linter.add_plugin("unicorn");
        linter.add_extension("plugin:unicorn/recommended");
        linter.add_rules([("unicorn/prefer-node-protocol", json!("off"))]);
        linter.add_override(
            FileOverride::new([".projenrc.js"]).rule("unicorn/prefer-module", json!("off")),
        );
        Ok(())
    }
}

// ── 7. formatter ─────────────────────────────────────────────────────────────

/// Must stay last among the lint rules: later extensions win rule conflicts.
pub struct PrettierRule;

impl Rule for PrettierRule {
    fn name(&self) -> &'static str {
        "prettier"
    }

    fn is_triggered(&self, config: &ResolvedConfiguration, project: &dyn ProjectModel) -> bool {
        feature_triggered(Feature::Prettier, config, project)
    }

    fn apply(&self, _: &ResolvedConfiguration, project: &mut dyn ProjectModel) -> TrailheadResult<()> {
        if let Some(linter) = project.linter() {
            linter.add_extension("prettier");
        }
        Ok(())
    }
}

// ── contributors ─────────────────────────────────────────────────────────────

/// Write the accumulated contributors into the manifest. Caller-invoked,
/// never part of the planner sequence.
pub fn apply_contributors(config: &ResolvedConfiguration, project: &mut dyn ProjectModel) {
    if config.contributors().is_empty() {
        return;
    }
    project.override_manifest_field("contributors", json!(config.contributors()));
}

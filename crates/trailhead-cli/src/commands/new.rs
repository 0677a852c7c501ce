//! Implementation of the `trailhead new` command.
//!
//! Responsibility: turn CLI arguments into option layers, drive the core
//! generator and scaffold service, and display results. No business logic
//! lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use trailhead_adapters::{InMemoryProject, LocalFilesystem};
use trailhead_core::{
    application::{ProjectGenerator, ScaffoldService, WriteOptions, WriteSummary},
    domain::{Feature, ProjectStructure, ResolvedConfiguration, builtin_defaults},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::layers,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `trailhead new`.
///
/// 1. Validate the name and pick the output directory
/// 2. Build the preset and override layers
/// 3. Resolve and plan, then append contributors
/// 4. Confirm unless `--yes`, `--quiet` or not on a terminal
/// 5. Emit; list files on `--dry-run`, otherwise write them
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;
    let root = project_root(&args);

    let layers = layers::build(&args.layers, Some(&args.name), &config)?;
    let mut generator = ProjectGenerator::new(
        &builtin_defaults(),
        &layers.preset,
        &layers.overrides,
        InMemoryProject::new(),
    )?;
    generator.add_contributors(args.contributors.iter().cloned());

    debug!(
        applied = ?generator.report().applied,
        skipped = ?generator.report().skipped,
        "Plan ready"
    );

    let interactive = std::io::stdin().is_terminal() && !output.is_json();
    if !args.yes && !global.quiet && !args.dry_run && interactive {
        show_configuration(generator.config(), &root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let structure = generator.emit(&root)?;

    if args.dry_run {
        return show_dry_run(&structure, &output);
    }

    output.header(&format!("Creating '{}'...", generator.config().name()))?;
    info!(path = %root.display(), files = structure.file_count(), "Writing project");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let summary = service.write(&structure, WriteOptions { force: args.force })?;

    show_summary(&structure, &summary, &output)
}

/// `--output` when given, otherwise `./NAME`.
fn project_root(args: &NewArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&args.name))
}

/// Reject names that cannot double as a directory name. Blank names pass
/// through so the resolver reports them as a missing field.
fn validate_project_name(name: &str) -> CliResult<()> {
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn enabled_features(config: &ResolvedConfiguration) -> Vec<&'static str> {
    Feature::ALL
        .into_iter()
        .filter(|f| config.is_enabled(*f))
        .map(|f| f.key())
        .collect()
}

fn show_configuration(
    config: &ResolvedConfiguration,
    root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", config.name()))?;
    out.print(&format!("  Package:   {}", config.package_name()))?;
    out.print(&format!("  Features:  {}", enabled_features(config).join(", ")))?;
    if !config.contributors().is_empty() {
        out.print(&format!("  Contributors: {}", config.contributors().join(", ")))?;
    }
    out.print(&format!("  Location:  {}", root.display()))?;
    out.print("")?;
    Ok(())
}

fn show_dry_run(structure: &ProjectStructure, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(&json!({
            "root": structure.root().display().to_string(),
            "files": structure.paths(),
        }))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would write {} files to {}",
        structure.file_count(),
        structure.root().display(),
    ))?;
    for path in structure.paths() {
        out.data(&format!("  {path}"))?;
    }
    Ok(())
}

fn show_summary(
    structure: &ProjectStructure,
    summary: &WriteSummary,
    out: &OutputManager,
) -> CliResult<()> {
    if out.is_json() {
        out.json(&json!({
            "root": structure.root().display().to_string(),
            "written": summary.written,
            "skipped": summary.skipped,
        }))?;
        return Ok(());
    }

    for path in &summary.skipped {
        out.warning(&format!("Kept existing {path}"))?;
    }
    out.success(&format!(
        "Wrote {} files to {}",
        summary.written.len(),
        structure.root().display()
    ))?;

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", structure.root().display()))?;
    out.print("  npm install")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

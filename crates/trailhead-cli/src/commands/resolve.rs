//! `trailhead resolve` - print the resolved configuration.

use tracing::instrument;

use trailhead_core::{
    domain::{DomainValidator, builtin_defaults, resolve},
    error::TrailheadError,
};

use crate::{
    cli::ResolveArgs,
    commands::layers,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Resolve the three layers and print the result as JSON. Nothing is
/// planned or written.
#[instrument(skip_all)]
pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layers = layers::build(&args.layers, args.name.as_deref(), &config)?;
    let resolved = resolve(&builtin_defaults(), &layers.preset, &layers.overrides)
        .map_err(TrailheadError::from)?;
    DomainValidator::validate_configuration(&resolved).map_err(TrailheadError::from)?;

    let value = serde_json::to_value(&resolved).map_err(|e| TrailheadError::Internal {
        message: format!("resolved configuration is not serialisable: {e}"),
    })?;
    output.json(&value)?;
    Ok(())
}

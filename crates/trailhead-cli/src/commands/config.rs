//! `trailhead config` - read and write configuration values.

use std::path::Path;

use toml::{Table, Value};
use tracing::info;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli, config_error},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or_else(|| CliError::UnknownConfigKey { key: key.clone() })?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(global.config.as_ref());
            set_value(&path, &key, &value)?;
            info!(key = %key, path = %path.display(), "Configuration updated");
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            let serialised = toml::to_string_pretty(&config)
                .map_err(|e| config_error("failed to serialise config", e))?;
            output.header("Current Configuration:")?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.data(
                &AppConfig::resolve_path(global.config.as_ref())
                    .display()
                    .to_string(),
            )?;
        }
    }

    Ok(())
}

/// Update one key in the file at `path`, creating it if needed. Other keys
/// and sections in the file are preserved.
fn set_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    }
    let Some((section, field)) = key.split_once('.') else {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    };

    let mut table = read_table(path)?;
    let value = typed_value(key, raw)?;

    let section_table = table
        .entry(section)
        .or_insert(Value::Table(Table::new()));
    let Value::Table(section_table) = section_table else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in {} is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_string(), value);

    Value::Table(table.clone())
        .try_into::<AppConfig>()
        .map_err(|e| config_error(format!("'{key}' would make the config invalid"), e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    let text = toml::to_string_pretty(&table)
        .map_err(|e| config_error("failed to serialise config", e))?;
    std::fs::write(path, text)
        .with_cli_context(|| format!("failed to write config to '{}'", path.display()))
}

fn read_table(path: &Path) -> CliResult<Table> {
    if !path.exists() {
        return Ok(Table::new());
    }
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("failed to read '{}'", path.display()))?;
    toml::from_str::<Table>(&text)
        .map_err(|e| config_error(format!("{} is not valid TOML", path.display()), e))
}

fn typed_value(key: &str, raw: &str) -> CliResult<Value> {
    match key {
        "output.no_color" => raw.parse::<bool>().map(Value::Boolean).map_err(|_| {
            CliError::InvalidInput {
                message: format!("'{key}' expects true or false, got '{raw}'"),
                source: None,
            }
        }),
        "output.format" => {
            <OutputFormat as clap::ValueEnum>::from_str(raw, true).map_err(|_| {
                CliError::InvalidInput {
                    message: format!("'{key}' expects auto, human, plain or json, got '{raw}'"),
                    source: None,
                }
            })?;
            Ok(Value::String(raw.to_ascii_lowercase()))
        }
        _ => Ok(Value::String(raw.to_string())),
    }
}

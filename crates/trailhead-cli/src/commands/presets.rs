//! `trailhead presets` - list available presets.

use serde_json::{Value, json};

use crate::{
    cli::{PresetFormat, PresetsArgs},
    commands::layers::preset_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: PresetsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let presets = preset_service(&config)?.list()?;

    let format = if output.is_json() {
        PresetFormat::Json
    } else {
        args.format
    };

    match format {
        PresetFormat::Table => {
            output.header("Available Presets:")?;
            for preset in &presets {
                output.data(&format!("  {:<14} {}", preset.name, preset.description))?;
                if !preset.keys.is_empty() {
                    output.print(&format!("  {:<14} sets: {}", "", preset.keys.join(", ")))?;
                }
            }
        }
        PresetFormat::List => {
            for preset in &presets {
                output.data(&preset.name)?;
            }
        }
        PresetFormat::Json => {
            let entries: Vec<Value> = presets
                .iter()
                .map(|p| {
                    json!({
                        "name": p.name,
                        "description": p.description,
                        "keys": p.keys,
                    })
                })
                .collect();
            output.json(&Value::Array(entries))?;
        }
    }

    Ok(())
}

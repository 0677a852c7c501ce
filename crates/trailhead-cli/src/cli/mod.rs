//! Command-line argument definitions.
//!
//! Everything here is plain clap derive. Conversion into core types happens in
//! the command handlers.

pub mod global;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use trailhead_core::domain::Feature;

pub use global::{GlobalArgs, OutputFormat};

/// Trailhead - opinionated tooling for new TypeScript projects.
#[derive(Debug, Parser)]
#[command(
    name = "trailhead",
    version,
    author,
    about = "Generate lint, spell-check, commit and hook tooling for a new project",
    long_about = "Trailhead resolves project options from builtin defaults, a preset and \
your overrides, then plans and writes the tooling configuration files \
(eslint, cspell, husky, commitlint, VS Code recommendations).",
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project's tooling files.
    #[command(visible_alias = "n")]
    New(NewArgs),

    /// Print the resolved configuration as JSON without planning anything.
    Resolve(ResolveArgs),

    /// List available presets.
    #[command(visible_alias = "ls")]
    Presets(PresetsArgs),

    /// Write a default configuration file.
    Init(InitArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),

    /// Inspect and edit the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Option-layer inputs shared by `new` and `resolve`.
#[derive(Debug, Clone, Default, Args)]
pub struct LayerArgs {
    /// Project description.
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Preset applied between the builtin defaults and your overrides.
    #[arg(short = 'p', long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// JSON or TOML file with option overrides.
    #[arg(long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,

    /// Turn a feature on (repeatable).
    #[arg(long = "enable", value_name = "FEATURE", value_parser = parse_feature)]
    pub enable: Vec<Feature>,

    /// Turn a feature off (repeatable).
    #[arg(long = "disable", value_name = "FEATURE", value_parser = parse_feature)]
    pub disable: Vec<Feature>,
}

#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Project name.
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub layers: LayerArgs,

    /// Add a contributor (repeatable, kept in order).
    #[arg(long = "contributor", value_name = "CONTRIBUTOR")]
    pub contributors: Vec<String>,

    /// Directory to generate into (defaults to ./NAME).
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Show the files that would be written without touching disk.
    #[arg(long)]
    pub dry_run: bool,

    /// Write into an existing directory.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Project name.
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub layers: LayerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    pub format: PresetFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetFormat {
    Table,
    List,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print one value.
    Get { key: String },
    /// Set one value in the configuration file.
    Set { key: String, value: String },
    /// Print the effective configuration.
    List,
    /// Print the configuration file path.
    Path,
}

fn parse_feature(raw: &str) -> Result<Feature, String> {
    raw.parse::<Feature>().map_err(|_| {
        let known: Vec<&str> = Feature::ALL.iter().map(Feature::key).collect();
        format!("unknown feature '{raw}' (expected one of: {})", known.join(", "))
    })
}

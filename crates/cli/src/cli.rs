//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use contracts::Environment;
use std::path::PathBuf;

/// csspipe - CSS post-processing pipeline descriptor tool
#[derive(Parser, Debug)]
#[command(
    name = "csspipe",
    author,
    version,
    about = "Load, validate and compare CSS post-processing pipeline descriptors",
    long_about = "Loads ordered plugin pipelines from TOML or JSON configuration.\n\n\
                  Validates plugin declarations, prints the resolved execution order, \n\
                  emits canonical per-environment pipelines and reports drift between \n\
                  checked-in configuration and the canonical definition."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CSSPIPE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "CSSPIPE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more pipeline configuration files
    Validate(ValidateArgs),

    /// Display the resolved plugin order of a configuration
    Info(InfoArgs),

    /// Print the canonical pipeline for an environment
    Preset(PresetArgs),

    /// Compare a configuration against the canonical pipeline
    Drift(DriftArgs),
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Paths to configuration files to validate
    #[arg(
        short,
        long = "config",
        default_value = "postcss.toml",
        env = "CSSPIPE_CONFIG",
        num_args = 1..
    )]
    pub configs: Vec<PathBuf>,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "postcss.toml", env = "CSSPIPE_CONFIG")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show plugin options
    #[arg(long)]
    pub options: bool,
}

/// Arguments for the `preset` command
#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Target environment (development, production)
    #[arg(short, long, default_value = "development", env = "CSSPIPE_ENV")]
    pub env: Environment,

    /// Output format
    #[arg(long, value_enum, default_value = "toml")]
    pub format: OutputFormat,
}

/// Arguments for the `drift` command
#[derive(Parser, Debug)]
pub struct DriftArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "postcss.toml", env = "CSSPIPE_CONFIG")]
    pub config: PathBuf,

    /// Environment whose canonical pipeline is expected
    #[arg(short, long, default_value = "development", env = "CSSPIPE_ENV")]
    pub env: Environment,

    /// Output report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Serialization format for emitted descriptors
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<&LogFormat> for observability::LogFormat {
    fn from(format: &LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

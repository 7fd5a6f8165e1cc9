//! `preset` command implementation.

use anyhow::{Context, Result};
use config_loader::{presets, ConfigLoader, PipelineDescriptor};
use tracing::info;

use crate::cli::{OutputFormat, PresetArgs};

/// Execute the `preset` command
pub fn run_preset(args: &PresetArgs) -> Result<()> {
    info!(env = %args.env, "Rendering canonical pipeline");

    let descriptor = presets::descriptor_for(args.env)
        .with_context(|| format!("Failed to build {} pipeline", args.env))?;

    print!("{}", render(&descriptor, args.format)?);
    Ok(())
}

fn render(descriptor: &PipelineDescriptor, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Toml => ConfigLoader::to_toml(descriptor)?,
        OutputFormat::Json => {
            let mut json = ConfigLoader::to_json(descriptor)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

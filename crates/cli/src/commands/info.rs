//! `info` command implementation.

use anyhow::{Context, Result};
use config_loader::{ConfigLoader, DescriptorShape, PipelineDescriptor};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::InfoArgs;
use crate::error::CliError;

/// Descriptor info for JSON output
#[derive(Serialize)]
struct DescriptorInfo {
    config_path: String,
    shape: DescriptorShape,
    plugins: Vec<PluginInfo>,
}

#[derive(Serialize)]
struct PluginInfo {
    position: usize,
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Value>,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading pipeline info");

    if !args.config.exists() {
        return Err(CliError::config_not_found(args.config.display().to_string()).into());
    }

    let (descriptor, shape) = ConfigLoader::load_path_with_shape(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    observability::record_descriptor_loaded(shape, descriptor.len());

    if args.json {
        let info = build_descriptor_info(&descriptor, shape, args);
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize pipeline info")?;
        println!("{}", json);
    } else {
        print_descriptor_info(&descriptor, shape, args);
    }

    Ok(())
}

fn build_descriptor_info(
    descriptor: &PipelineDescriptor,
    shape: DescriptorShape,
    args: &InfoArgs,
) -> DescriptorInfo {
    let plugins = descriptor
        .iter()
        .enumerate()
        .map(|(position, plugin)| PluginInfo {
            position,
            id: plugin.id.clone(),
            options: if args.options {
                plugin.options.clone()
            } else {
                None
            },
        })
        .collect();

    DescriptorInfo {
        config_path: args.config.display().to_string(),
        shape,
        plugins,
    }
}

fn print_descriptor_info(descriptor: &PipelineDescriptor, shape: DescriptorShape, args: &InfoArgs) {
    println!("🎨 Pipeline {} ({shape} form)", args.config.display());
    println!("   Plugins ({})", descriptor.len());

    for (i, plugin) in descriptor.iter().enumerate() {
        let is_last = i == descriptor.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        println!("   {} {}. {}", prefix, i + 1, plugin.id);

        if args.options {
            match &plugin.options {
                Some(options) => println!("   {}   options: {}", child_prefix, options),
                None => println!("   {}   options: (none)", child_prefix),
            }
        }
    }

    println!();
}

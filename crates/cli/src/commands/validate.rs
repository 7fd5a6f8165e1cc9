//! `validate` command implementation.

use anyhow::{Context, Result};
use config_loader::ConfigLoader;
use observability::LoadStats;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::cli::ValidateArgs;
use crate::error::CliError;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<DescriptorSummary>,
}

#[derive(Serialize)]
struct DescriptorSummary {
    shape: String,
    plugin_count: usize,
    plugins: Vec<String>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let mut stats = LoadStats::new();
    let results: Vec<ValidationResult> = args
        .configs
        .iter()
        .map(|path| {
            info!(config = %path.display(), "Validating configuration");
            validate_config(path, &mut stats)
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        for result in &results {
            print_validation_result(result);
        }
        if results.len() > 1 {
            println!("\n{}", stats.summary());
        }
    }

    let failed = results.iter().filter(|r| !r.valid).count();
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::validation_failed(failed, results.len()).into())
    }
}

fn validate_config(path: &Path, stats: &mut LoadStats) -> ValidationResult {
    let config_path = path.display().to_string();

    // Check file exists
    if !path.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", path.display())),
            warnings: None,
            summary: None,
        };
    }

    match ConfigLoader::load_path_with_shape(path) {
        Ok((descriptor, shape)) => {
            stats.record_success(shape, descriptor.len());
            let warnings = config_loader::warnings(&descriptor);

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(DescriptorSummary {
                    shape: shape.to_string(),
                    plugin_count: descriptor.len(),
                    plugins: descriptor.identifiers().map(str::to_string).collect(),
                }),
            }
        }
        Err(e) => {
            stats.record_failure(e.kind());
            ValidationResult {
                valid: false,
                config_path,
                error: Some(e.to_string()),
                warnings: None,
                summary: None,
            }
        }
    }
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Shape: {}", summary.shape);
            println!("  Plugins: {}", summary.plugin_count);
            println!("  Order: {}", summary.plugins.join(" → "));
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}

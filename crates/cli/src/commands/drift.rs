//! `drift` command implementation.

use anyhow::{Context, Result};
use config_loader::drift::{self, DriftReport};
use config_loader::{presets, ConfigLoader};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::DriftArgs;
use crate::error::CliError;

#[derive(Serialize)]
struct DriftOutput<'a> {
    config_path: String,
    env: String,
    clean: bool,
    #[serde(flatten)]
    report: &'a DriftReport,
}

/// Execute the `drift` command
pub fn run_drift(args: &DriftArgs) -> Result<()> {
    info!(config = %args.config.display(), env = %args.env, "Checking pipeline drift");

    if !args.config.exists() {
        return Err(CliError::config_not_found(args.config.display().to_string()).into());
    }

    let actual = ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    let expected = presets::descriptor_for(args.env)
        .with_context(|| format!("Failed to build {} pipeline", args.env))?;

    let report = drift::compare(&expected, &actual);

    if args.json {
        let output = DriftOutput {
            config_path: args.config.display().to_string(),
            env: args.env.to_string(),
            clean: report.is_clean(),
            report: &report,
        };
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize drift report")?;
        println!("{}", json);
    } else {
        print_report(&report, args);
    }

    if report.is_clean() {
        Ok(())
    } else {
        warn!(
            missing = report.missing.len(),
            unexpected = report.unexpected.len(),
            options_changed = report.options_changed.len(),
            order_changed = report.order_changed,
            "Pipeline drift detected"
        );
        Err(CliError::drift_detected(args.config.display().to_string(), args.env.to_string()).into())
    }
}

fn print_report(report: &DriftReport, args: &DriftArgs) {
    if report.is_clean() {
        println!(
            "✓ {} matches the canonical {} pipeline",
            args.config.display(),
            args.env
        );
        return;
    }

    println!(
        "✗ {} differs from the canonical {} pipeline",
        args.config.display(),
        args.env
    );
    for id in &report.missing {
        println!("  - missing: {}", id);
    }
    for id in &report.unexpected {
        println!("  + unexpected: {}", id);
    }
    for id in &report.options_changed {
        println!("  ~ options changed: {}", id);
    }
    if report.order_changed {
        println!("  ↕ plugin order differs");
    }
}

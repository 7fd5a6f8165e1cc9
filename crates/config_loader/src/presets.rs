//! Canonical pipelines per build environment.
//!
//! One definition per environment instead of copying near-identical
//! configuration files between directories.

use contracts::{ContractError, Environment, PipelineDescriptor, PluginReference};
use serde_json::json;

/// Directories searched by the import plugin, in lookup order
pub const IMPORT_SEARCH_PATHS: [&str; 2] = ["tailwind", "node_modules"];

/// Config file handed to the utility framework plugin
pub const TAILWIND_CONFIG_PATH: &str = "tailwind/app/config/tailwind.config.js";

/// Build the canonical descriptor for `env`
pub fn descriptor_for(env: Environment) -> Result<PipelineDescriptor, ContractError> {
    let plugins = match env {
        Environment::Development => vec![
            import(),
            PluginReference::with_options("tailwindcss/nesting", json!({})),
            tailwind(),
            PluginReference::with_options("postcss-nested", json!({})),
            PluginReference::with_options("postcss-reporter", json!({})),
        ],
        Environment::Production => vec![
            import(),
            tailwind(),
            PluginReference::new("postcss-nested"),
            PluginReference::new("autoprefixer"),
            PluginReference::with_options("cssnano", json!({ "preset": "default" })),
            PluginReference::new("postcss-reporter"),
        ],
    };
    PipelineDescriptor::new(plugins)
}

fn import() -> PluginReference {
    PluginReference::with_options("postcss-import", json!({ "path": IMPORT_SEARCH_PATHS }))
}

fn tailwind() -> PluginReference {
    PluginReference::with_options("tailwindcss", json!(TAILWIND_CONFIG_PATH))
}

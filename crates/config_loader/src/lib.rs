//! # Config Loader
//!
//! Pipeline descriptor loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Normalize list and mapping `plugins` shapes
//! - Validate configuration legality
//! - Generate `PipelineDescriptor`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let descriptor = ConfigLoader::load_from_path(Path::new("postcss.toml")).unwrap();
//! for plugin in &descriptor {
//!     println!("{}", plugin.id);
//! }
//! ```

pub mod drift;
mod parser;
pub mod presets;
mod validator;

pub use contracts::{DescriptorShape, PipelineDescriptor};
pub use parser::ConfigFormat;
pub use crate::validator::warnings;

use contracts::ContractError;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

use parser::RawDocument;

/// Configuration loader
///
/// Provides static methods to load descriptors from files, strings or
/// in-memory documents.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load descriptor from an in-memory structured document
    ///
    /// # Errors
    /// - `MalformedDescriptor` when `plugins` is missing or badly shaped
    /// - `DuplicatePlugin` when an identifier repeats
    pub fn load(document: &Value) -> Result<PipelineDescriptor, ContractError> {
        Self::load_value_with_shape(document).map(|(descriptor, _)| descriptor)
    }

    /// Like [`ConfigLoader::load`], also reporting the input shape
    pub fn load_value_with_shape(
        document: &Value,
    ) -> Result<(PipelineDescriptor, DescriptorShape), ContractError> {
        Self::finish(parser::parse_value(document))
    }

    /// Load descriptor from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<PipelineDescriptor, ContractError> {
        Self::load_path_with_shape(path).map(|(descriptor, _)| descriptor)
    }

    /// Like [`ConfigLoader::load_from_path`], also reporting the input shape
    pub fn load_path_with_shape(
        path: &Path,
    ) -> Result<(PipelineDescriptor, DescriptorShape), ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        debug!(path = %path.display(), ?format, "Read pipeline config");
        Self::load_str_with_shape(&content, format)
    }

    /// Load descriptor from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<PipelineDescriptor, ContractError> {
        Self::load_str_with_shape(content, format).map(|(descriptor, _)| descriptor)
    }

    /// Like [`ConfigLoader::load_from_str`], also reporting the input shape
    pub fn load_str_with_shape(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(PipelineDescriptor, DescriptorShape), ContractError> {
        Self::finish(parser::parse(content, format))
    }

    /// Serialize PipelineDescriptor to TOML string
    pub fn to_toml(descriptor: &PipelineDescriptor) -> Result<String, ContractError> {
        toml::to_string_pretty(descriptor)
            .map_err(|e| ContractError::serialize(format!("TOML serialize error: {e}")))
    }

    /// Serialize PipelineDescriptor to JSON string
    pub fn to_json(descriptor: &PipelineDescriptor) -> Result<String, ContractError> {
        serde_json::to_string_pretty(descriptor)
            .map_err(|e| ContractError::serialize(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::malformed("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| ContractError::malformed(format!("unsupported config format: .{ext}")))
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Normalize and validate a parsed document
    fn finish(
        raw: Result<RawDocument, ContractError>,
    ) -> Result<(PipelineDescriptor, DescriptorShape), ContractError> {
        let (plugins, shape) = raw?.normalize();
        match validator::validate(plugins) {
            Ok(descriptor) => {
                info!(plugins = descriptor.len(), %shape, "Pipeline descriptor loaded");
                Ok((descriptor, shape))
            }
            Err(e) => {
                warn!(error = %e, %shape, "Pipeline descriptor rejected");
                Err(e)
            }
        }
    }
}

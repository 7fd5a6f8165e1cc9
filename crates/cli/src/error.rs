//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// One or more configurations failed to load
    #[error("{failed} of {total} configuration(s) failed validation")]
    ValidationFailed { failed: usize, total: usize },

    /// Configuration diverges from the canonical pipeline
    #[error("Configuration {path} drifted from the canonical {env} pipeline")]
    DriftDetected { path: String, env: String },
}

impl CliError {
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn validation_failed(failed: usize, total: usize) -> Self {
        Self::ValidationFailed { failed, total }
    }

    pub fn drift_detected(path: impl Into<String>, env: impl Into<String>) -> Self {
        Self::DriftDetected {
            path: path.into(),
            env: env.into(),
        }
    }
}

//! Layered error definitions
//!
//! Categorized by source: descriptor / io / serialize

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Descriptor Errors =====
    /// Structurally invalid descriptor source
    #[error("malformed descriptor: {message}")]
    MalformedDescriptor {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Same plugin identifier declared twice
    #[error("duplicate plugin '{id}' at positions {first} and {second}")]
    DuplicatePlugin {
        id: String,
        first: usize,
        second: usize,
    },

    // ===== Serialization Errors =====
    /// Descriptor could not be written back out
    #[error("descriptor serialize error: {message}")]
    Serialize { message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error classification, used for metrics labels and CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    Duplicate,
    Serialize,
    Io,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::Duplicate => "duplicate",
            Self::Serialize => "serialize",
            Self::Io => "io",
        }
    }
}

impl ContractError {
    /// Create malformed descriptor error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            message: message.into(),
            source: None,
        }
    }

    /// Create malformed descriptor error pointing at a field path
    pub fn malformed_at(field: impl AsRef<str>, message: impl AsRef<str>) -> Self {
        Self::malformed(format!("{}: {}", field.as_ref(), message.as_ref()))
    }

    /// Create duplicate plugin error
    pub fn duplicate_plugin(id: impl Into<String>, first: usize, second: usize) -> Self {
        Self::DuplicatePlugin {
            id: id.into(),
            first,
            second,
        }
    }

    /// Create serialize error
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedDescriptor { .. } => ErrorKind::Malformed,
            Self::DuplicatePlugin { .. } => ErrorKind::Duplicate,
            Self::Serialize { .. } => ErrorKind::Serialize,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

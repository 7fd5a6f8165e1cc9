//! PluginReference - one step of a CSS post-processing pipeline

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// A named plugin plus the options handed to it.
///
/// Options are opaque: the loader never looks inside them. `None` means the
/// source declared no options at all, which downstream tools may treat
/// differently from an explicit empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PluginReference {
    /// Plugin identifier, e.g. `postcss-import` or `tailwindcss/nesting`
    #[validate(
        length(min = 1, message = "identifier cannot be empty"),
        custom(function = "validate_identifier")
    )]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl PluginReference {
    /// Plugin without options
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: None,
        }
    }

    /// Plugin with options
    pub fn with_options(id: impl Into<String>, options: Value) -> Self {
        Self {
            id: id.into(),
            options: Some(options),
        }
    }
}

fn validate_identifier(id: &str) -> Result<(), ValidationError> {
    if id.trim() != id {
        let mut err = ValidationError::new("surrounding_whitespace");
        err.message = Some(Cow::Borrowed(
            "identifier cannot start or end with whitespace",
        ));
        return Err(err);
    }
    Ok(())
}

//! Naming conventions for member classification.

use serde::{Deserialize, Serialize};

use crate::errors::VinculumError;

/// Default prefix marking a field as injectable.
pub const DEFAULT_FIELD_PREFIX: &str = "inject_";
/// Default prefix marking a single-argument setter as injectable.
pub const DEFAULT_SETTER_PREFIX: &str = "set_";

/// Prefix conventions the classifier applies when scanning member tables.
///
/// A member whose declared name starts with the matching prefix is
/// injectable by convention; the prefix is stripped to form the candidate
/// context key. Explicit markers on a descriptor override the convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Prefix for injectable fields.
    #[serde(default = "default_field_prefix")]
    pub field_prefix: String,
    /// Prefix for injectable setters.
    #[serde(default = "default_setter_prefix")]
    pub setter_prefix: String,
}

fn default_field_prefix() -> String {
    DEFAULT_FIELD_PREFIX.to_string()
}

fn default_setter_prefix() -> String {
    DEFAULT_SETTER_PREFIX.to_string()
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            field_prefix: default_field_prefix(),
            setter_prefix: default_setter_prefix(),
        }
    }
}

impl BindingConfig {
    pub fn new(field_prefix: impl Into<String>, setter_prefix: impl Into<String>) -> Self {
        Self {
            field_prefix: field_prefix.into(),
            setter_prefix: setter_prefix.into(),
        }
    }

    /// Parse a configuration document; missing fields keep their defaults.
    pub fn from_json(data: &str) -> Result<Self, VinculumError> {
        serde_json::from_str(data)
            .map_err(|e| VinculumError::Config(format!("invalid binding config: {}", e)))
    }

    pub fn with_field_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.field_prefix = prefix.into();
        self
    }

    pub fn with_setter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.setter_prefix = prefix.into();
        self
    }
}

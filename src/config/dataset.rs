//! Dataset configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the variant to solve comes from
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Path to a JSON or YAML variant file; the built-in sample is used when unset
    pub path: Option<String>,
}

impl DatasetConfig {
    /// Get the configured variant file path, if any
    pub fn variant_path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new)
    }

    /// Validate dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.trim().is_empty() => Err(ValidationError::EmptyDatasetPath),
            _ => Ok(()),
        }
    }
}

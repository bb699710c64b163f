//! File-based Variant Source Adapter
//!
//! Reads a variant from a JSON or YAML file of nested numeric arrays:
//!
//! ```yaml
//! criteria:
//!   - [1, 2]
//!   - [0.5, 1]
//! alternatives:
//!   - [[1, 3], [0.3333333333333333, 1]]
//!   - [[1, 1], [1, 1]]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ahp::Variant;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::VariantSource;

/// Serialization format of a variant file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFileFormat {
    Json,
    Yaml,
}

impl VariantFileFormat {
    /// Detects the format from the file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ValidationError::invalid_format(
                "dataset.path",
                format!(
                    "unsupported variant file extension for {} (expected .json, .yaml or .yml)",
                    path.display()
                ),
            )
            .into()),
        }
    }
}

/// Loads a variant from a file on disk.
#[derive(Debug, Clone)]
pub struct FileVariantSource {
    path: PathBuf,
    format: VariantFileFormat,
}

impl FileVariantSource {
    /// Creates a source, detecting the format from the extension.
    ///
    /// # Example
    /// ```ignore
    /// let source = FileVariantSource::new("./data/variant.json")?;
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let format = VariantFileFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Creates a source with an explicit format.
    pub fn with_format<P: AsRef<Path>>(path: P, format: VariantFileFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> VariantFileFormat {
        self.format
    }

    /// Parses variant content in this source's format.
    pub fn parse(&self, content: &str) -> Result<Variant, DomainError> {
        let parsed = match self.format {
            VariantFileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            VariantFileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| {
            DomainError::from(ValidationError::invalid_format("variant", reason))
                .with_detail("path", self.path.display().to_string())
        })
    }
}

impl VariantSource for FileVariantSource {
    fn load(&self) -> Result<Variant, DomainError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!("Failed to read variant file {}: {}", self.path.display(), e);
            DomainError::new(
                ErrorCode::DatasetUnavailable,
                format!("Cannot read variant file: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let variant = self.parse(&content)?;
        tracing::debug!(
            "Loaded variant with {} criteria from {}",
            variant.criteria_count(),
            self.path.display()
        );
        Ok(variant)
    }

    fn describe(&self) -> String {
        format!("variant file {}", self.path.display())
    }
}

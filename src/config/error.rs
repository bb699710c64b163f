//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Solver max_iterations must be between 1 and {max}, got {actual}")]
    InvalidMaxIterations { max: u32, actual: u32 },

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Dataset path cannot be empty")]
    EmptyDatasetPath,
}

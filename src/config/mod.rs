//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_SHERPA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Solving with at most {} iterations", config.solver.max_iterations);
//! ```

mod dataset;
mod error;
mod logging;
mod solver;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use solver::{SolverConfig, MAX_ITERATIONS_LIMIT};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration that solves the built-in sample variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Solver configuration (iteration cap)
    #[serde(default)]
    pub solver: SolverConfig,

    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Dataset configuration (variant file location)
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_SHERPA__SOLVER__MAX_ITERATIONS=20` -> `solver.max_iterations = 20`
    /// - `AHP_SHERPA__DATASET__PATH=./variant.yaml` -> `dataset.path = "./variant.yaml"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solver.validate()?;
        self.logging.validate()?;
        self.dataset.validate()?;
        Ok(())
    }
}

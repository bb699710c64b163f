//! Solver configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{AhpSolver, DEFAULT_MAX_ITERATIONS};

/// Upper bound accepted for `max_iterations`.
pub const MAX_ITERATIONS_LIMIT: u32 = 100;

/// AHP solver configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum evaluate/correct iterations per matrix
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl SolverConfig {
    /// Build a solver from this configuration
    pub fn build_solver(&self) -> AhpSolver {
        AhpSolver::new(self.max_iterations)
    }

    /// Validate solver configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(ValidationError::InvalidMaxIterations {
                max: MAX_ITERATIONS_LIMIT,
                actual: self.max_iterations,
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

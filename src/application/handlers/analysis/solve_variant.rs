//! SolveVariantHandler - Query handler that ranks the alternatives of a variant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::ahp::{AhpSolver, VariantOutcome};
use crate::domain::foundation::DomainError;
use crate::ports::VariantSource;

/// Query to solve the variant supplied by the configured source.
#[derive(Debug, Clone, Default)]
pub struct SolveVariantQuery {
    /// Overrides the handler's iteration cap for this query.
    pub max_iterations: Option<u32>,
}

/// Result of solving a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveVariantResult {
    /// Where the variant was loaded from.
    pub source: String,
    pub criteria_count: usize,
    pub alternative_count: usize,
    pub outcome: VariantOutcome,
}

/// Handler for solving decision variants.
pub struct SolveVariantHandler {
    source: Arc<dyn VariantSource>,
    solver: AhpSolver,
}

impl SolveVariantHandler {
    pub fn new(source: Arc<dyn VariantSource>, solver: AhpSolver) -> Self {
        Self { source, solver }
    }

    pub fn handle(&self, query: SolveVariantQuery) -> Result<SolveVariantResult, DomainError> {
        let source = self.source.describe();
        let variant = self.source.load()?;

        let solver = query
            .max_iterations
            .map(AhpSolver::new)
            .unwrap_or(self.solver);

        debug!(
            source = %source,
            criteria = variant.criteria_count(),
            alternatives = variant.alternative_count(),
            max_iterations = solver.max_iterations(),
            "Solving variant"
        );

        let outcome = variant.solve(&solver)?;

        info!(
            source = %source,
            best_alternative_index = outcome.best_alternative_index,
            "Solved variant"
        );

        Ok(SolveVariantResult {
            source,
            criteria_count: variant.criteria_count(),
            alternative_count: variant.alternative_count(),
            outcome,
        })
    }
}

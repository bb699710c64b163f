//! AHP Solver - Estimate, evaluate, correct, repeat.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AhpError, ComparisonMatrix, ConsistencyEvaluator, MatrixCorrector, MultiCriteriaAggregator,
    PriorityEstimator, VariantOutcome, WeightNormalizer,
};

/// Default cap on solve iterations (one evaluation per iteration).
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Outcome of solving one comparison matrix.
///
/// Describes the last matrix in the correction chain, which is the first one
/// whose consistency ratio was acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Row geometric means.
    pub priority_vector: Vec<f64>,
    /// Sum of the priority vector.
    pub priority_vector_sum: f64,
    /// Normalized priorities.
    pub weight_vector: Vec<f64>,
    /// Matrix × weight vector.
    pub matrix_weight_vector: Vec<f64>,
    /// Element-wise ratio of the matrix weight vector to the weight vector.
    pub lambda_vector: Vec<f64>,
    /// Principal eigenvalue estimate.
    pub eigenvalue: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    /// Number of evaluations performed; 1 when no correction was needed.
    pub iterations: u32,
}

/// Solves comparison matrices, repairing inconsistent ones.
///
/// The solver alternates between evaluating a matrix and correcting it until
/// the consistency ratio is acceptable or `max_iterations` evaluations have
/// run without success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AhpSolver {
    max_iterations: u32,
}

impl Default for AhpSolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl AhpSolver {
    /// Creates a solver; a cap of zero is treated as one.
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Solves a single comparison matrix.
    ///
    /// # Errors
    /// - `DegenerateWeights` if a weight rounds to zero
    /// - `DidNotConverge` if the cap is reached with an unacceptable ratio
    pub fn solve(&self, matrix: &ComparisonMatrix) -> Result<SolveResult, AhpError> {
        let mut current = matrix.clone();
        let mut iteration: u32 = 0;

        loop {
            iteration += 1;

            let priority_vector = PriorityEstimator::estimate(&current);
            let priority_vector_sum = WeightNormalizer::sum(&priority_vector);
            let weight_vector = WeightNormalizer::normalize(&priority_vector)?;
            let report = ConsistencyEvaluator::evaluate(&current, &weight_vector)?;

            debug!(
                iteration,
                size = current.size(),
                eigenvalue = report.eigenvalue,
                consistency_ratio = report.consistency_ratio,
                "Evaluated comparison matrix"
            );

            if report.is_acceptable() {
                return Ok(SolveResult {
                    priority_vector,
                    priority_vector_sum,
                    weight_vector,
                    matrix_weight_vector: report.matrix_weight_vector,
                    lambda_vector: report.lambda_vector,
                    eigenvalue: report.eigenvalue,
                    consistency_index: report.consistency_index,
                    consistency_ratio: report.consistency_ratio,
                    iterations: iteration,
                });
            }

            if iteration >= self.max_iterations {
                warn!(
                    iterations = iteration,
                    consistency_ratio = report.consistency_ratio,
                    "Comparison matrix did not reach acceptable consistency"
                );
                return Err(AhpError::DidNotConverge {
                    iterations: iteration,
                    consistency_ratio: report.consistency_ratio,
                });
            }

            let correction = MatrixCorrector::correct(&current, &weight_vector)?;
            debug!(
                iteration,
                worst_index = correction.worst_index,
                "Corrected least consistent row"
            );
            current = correction.matrix;
        }
    }

    /// Solves a full multi-criteria decision.
    ///
    /// `alternatives` holds one alternative-vs-alternative matrix per
    /// criterion, in the same order as the rows of `criteria`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if there is not one alternative matrix per
    ///   criterion, or the alternative matrices differ in size
    /// - any error from solving an individual matrix
    pub fn solve_variant(
        &self,
        criteria: &ComparisonMatrix,
        alternatives: &[ComparisonMatrix],
    ) -> Result<VariantOutcome, AhpError> {
        if alternatives.len() != criteria.size() {
            return Err(AhpError::DimensionMismatch {
                expected: criteria.size(),
                actual: alternatives.len(),
            });
        }

        let criteria_weights = self.solve(criteria)?.weight_vector;
        let alternative_weights = alternatives
            .iter()
            .map(|matrix| self.solve(matrix).map(|result| result.weight_vector))
            .collect::<Result<Vec<_>, _>>()?;

        let outcome = MultiCriteriaAggregator::aggregate(&criteria_weights, &alternative_weights)?;

        debug!(
            best_alternative_index = outcome.best_alternative_index,
            scores = ?outcome.scores,
            "Aggregated multi-criteria decision"
        );

        Ok(outcome)
    }
}

/// Solves a single matrix with the default iteration cap.
pub fn solve_matrix(matrix: &ComparisonMatrix) -> Result<SolveResult, AhpError> {
    AhpSolver::default().solve(matrix)
}

/// Solves a multi-criteria decision with the default iteration cap.
pub fn solve_variant(
    criteria: &ComparisonMatrix,
    alternatives: &[ComparisonMatrix],
) -> Result<VariantOutcome, AhpError> {
    AhpSolver::default().solve_variant(criteria, alternatives)
}

//! AHP Module - Pure domain services for the Analytic Hierarchy Process.
//!
//! Derives priority weights from pairwise comparison matrices, measures their
//! consistency, repairs matrices whose judgments contradict each other, and
//! aggregates per-criterion weights into a final ranking of alternatives.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Validated N×N pairwise judgment matrix
//! - `PriorityEstimator` / `WeightNormalizer` - Row geometric means, normalized
//! - `ConsistencyEvaluator` - Eigenvalue estimate, CI and CR against RI(N)
//! - `MatrixCorrector` - Replaces the least consistent row/column
//! - `AhpSolver` - Bounded evaluate/correct loop
//! - `MultiCriteriaAggregator` - Weighted combination and best alternative
//!
//! # Rounding
//!
//! Every intermediate value is rounded to two decimals immediately after it is
//! computed (see [`crate::domain::foundation::round2`]). Results therefore
//! match a hand-computed worksheet rather than full floating point precision.
//!
//! All functions are pure. No ports or adapters are involved.

mod aggregator;
mod comparison_matrix;
mod consistency;
mod corrector;
mod errors;
mod priority;
mod solver;
mod variant;

pub use aggregator::{MultiCriteriaAggregator, VariantOutcome};
pub use comparison_matrix::{ComparisonMatrix, MAX_MATRIX_SIZE};
pub use consistency::{
    random_consistency_index, ConsistencyEvaluator, ConsistencyReport, CONSISTENCY_THRESHOLD,
    RANDOM_CONSISTENCY_INDEX,
};
pub use corrector::{Correction, MatrixCorrector};
pub use errors::AhpError;
pub use priority::{PriorityEstimator, WeightNormalizer};
pub use solver::{solve_matrix, solve_variant, AhpSolver, SolveResult, DEFAULT_MAX_ITERATIONS};
pub use variant::Variant;

//! Consistency Evaluator - Eigenvalue estimate, consistency index and ratio.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::round2;

use super::{AhpError, ComparisonMatrix, MAX_MATRIX_SIZE};

/// Expected consistency index of a random matrix, indexed by `size - 1`.
pub const RANDOM_CONSISTENCY_INDEX: [f64; MAX_MATRIX_SIZE] =
    [0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Consistency ratios strictly below this value are acceptable.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Looks up RI(N) for a matrix of the given size.
pub fn random_consistency_index(size: usize) -> Option<f64> {
    size.checked_sub(1)
        .and_then(|index| RANDOM_CONSISTENCY_INDEX.get(index))
        .copied()
}

/// Intermediate and final values of a consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Matrix × weight vector.
    pub matrix_weight_vector: Vec<f64>,
    /// Element-wise ratio of `matrix_weight_vector` to the weight vector.
    pub lambda_vector: Vec<f64>,
    /// Mean of the lambda vector (principal eigenvalue estimate).
    pub eigenvalue: f64,
    /// CI = (eigenvalue - N) / (N - 1).
    pub consistency_index: f64,
    /// CR = CI / RI(N).
    pub consistency_ratio: f64,
}

impl ConsistencyReport {
    /// Whether the consistency ratio passes the acceptance threshold.
    pub fn is_acceptable(&self) -> bool {
        ConsistencyEvaluator::is_acceptable(self.consistency_ratio)
    }
}

/// Measures how logically consistent a comparison matrix is.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Runs the full consistency check of `matrix` against `weights`.
    ///
    /// Every intermediate value is rounded to two decimals, including the
    /// running accumulator of each row product.
    ///
    /// # Edge Cases
    /// - N = 1: CI and CR are 0
    /// - N = 2: CI is computed, CR is 0 because RI(2) = 0
    ///
    /// # Errors
    /// - `DimensionMismatch` if `weights` does not have one entry per row
    /// - `DegenerateWeights` if any weight is not positive
    pub fn evaluate(
        matrix: &ComparisonMatrix,
        weights: &[f64],
    ) -> Result<ConsistencyReport, AhpError> {
        let size = matrix.size();
        if weights.len() != size {
            return Err(AhpError::DimensionMismatch {
                expected: size,
                actual: weights.len(),
            });
        }
        if let Some(index) = weights.iter().position(|w| w.is_nan() || *w <= 0.0) {
            return Err(AhpError::DegenerateWeights { index });
        }

        let matrix_weight_vector = Self::matrix_weight_vector(matrix, weights);
        let lambda_vector = Self::lambda_vector(&matrix_weight_vector, weights);
        let eigenvalue = Self::eigenvalue(&lambda_vector);
        let consistency_index = Self::consistency_index(eigenvalue, size);
        let consistency_ratio = Self::consistency_ratio(consistency_index, size);

        Ok(ConsistencyReport {
            matrix_weight_vector,
            lambda_vector,
            eigenvalue,
            consistency_index,
            consistency_ratio,
        })
    }

    /// Row-wise weighted sums, rounding after every accumulation step.
    pub fn matrix_weight_vector(matrix: &ComparisonMatrix, weights: &[f64]) -> Vec<f64> {
        matrix
            .rows()
            .iter()
            .map(|row| {
                let total = row
                    .iter()
                    .zip(weights)
                    .fold(0.0, |acc, (value, weight)| round2(acc + value * weight));
                round2(total)
            })
            .collect()
    }

    /// Element-wise `matrix_weight_vector[i] / weights[i]`.
    pub fn lambda_vector(matrix_weight_vector: &[f64], weights: &[f64]) -> Vec<f64> {
        matrix_weight_vector
            .iter()
            .zip(weights)
            .map(|(mw, w)| round2(mw / w))
            .collect()
    }

    /// Mean of the lambda vector.
    pub fn eigenvalue(lambda_vector: &[f64]) -> f64 {
        if lambda_vector.is_empty() {
            return 0.0;
        }
        let sum: f64 = lambda_vector.iter().sum();
        round2(sum / lambda_vector.len() as f64)
    }

    /// CI = (eigenvalue - N) / (N - 1); 0 for N <= 1.
    pub fn consistency_index(eigenvalue: f64, size: usize) -> f64 {
        if size <= 1 {
            return 0.0;
        }
        let n = size as f64;
        round2((eigenvalue - n) / (n - 1.0))
    }

    /// CR = CI / RI(N); 0 when RI(N) is 0 or unknown.
    pub fn consistency_ratio(consistency_index: f64, size: usize) -> f64 {
        match random_consistency_index(size) {
            Some(ri) if ri > 0.0 => round2(consistency_index / ri),
            _ => 0.0,
        }
    }

    /// |CR| < 0.10.
    pub fn is_acceptable(consistency_ratio: f64) -> bool {
        consistency_ratio.abs() < CONSISTENCY_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> ComparisonMatrix {
        ComparisonMatrix::new(rows).unwrap()
    }

    #[test]
    fn random_index_table_lookup() {
        assert_eq!(random_consistency_index(0), None);
        assert_eq!(random_consistency_index(1), Some(0.0));
        assert_eq!(random_consistency_index(2), Some(0.0));
        assert_eq!(random_consistency_index(3), Some(0.58));
        assert_eq!(random_consistency_index(10), Some(1.49));
        assert_eq!(random_consistency_index(11), None);
    }

    #[test]
    fn evaluate_uniform_matrix() {
        let m = matrix(vec![vec![1.0; 3]; 3]);
        let report = ConsistencyEvaluator::evaluate(&m, &[0.33, 0.33, 0.33]).unwrap();

        assert_eq!(report.matrix_weight_vector, vec![0.99, 0.99, 0.99]);
        assert_eq!(report.lambda_vector, vec![3.0, 3.0, 3.0]);
        assert_eq!(report.eigenvalue, 3.0);
        assert_eq!(report.consistency_index, 0.0);
        assert_eq!(report.consistency_ratio, 0.0);
        assert!(report.is_acceptable());
    }

    #[test]
    fn evaluate_near_consistent_matrix() {
        let m = matrix(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![0.2, 1.0 / 3.0, 1.0],
        ]);
        let report = ConsistencyEvaluator::evaluate(&m, &[0.64, 0.26, 0.11]).unwrap();

        assert_eq!(report.matrix_weight_vector, vec![1.97, 0.8, 0.33]);
        assert_eq!(report.lambda_vector, vec![3.08, 3.08, 3.0]);
        assert_eq!(report.eigenvalue, 3.05);
        assert_eq!(report.consistency_index, 0.03);
        assert_eq!(report.consistency_ratio, 0.05);
        assert!(report.is_acceptable());
    }

    #[test]
    fn evaluate_four_by_four_matrix() {
        let m = matrix(vec![
            vec![1.0, 4.0, 0.25, 0.5],
            vec![0.25, 1.0, 0.25, 0.2],
            vec![4.0, 4.0, 1.0, 2.0],
            vec![2.0, 5.0, 0.5, 1.0],
        ]);
        let report = ConsistencyEvaluator::evaluate(&m, &[0.17, 0.07, 0.47, 0.3]).unwrap();

        assert_eq!(report.matrix_weight_vector, vec![0.72, 0.29, 2.03, 1.23]);
        assert_eq!(report.lambda_vector, vec![4.24, 4.14, 4.32, 4.1]);
        assert_eq!(report.eigenvalue, 4.2);
        assert_eq!(report.consistency_index, 0.07);
        assert_eq!(report.consistency_ratio, 0.08);
    }

    #[test]
    fn evaluate_inconsistent_matrix() {
        let m = matrix(vec![
            vec![1.0, 3.0, 0.2],
            vec![1.0 / 3.0, 1.0, 5.0],
            vec![5.0, 0.2, 1.0],
        ]);
        let report = ConsistencyEvaluator::evaluate(&m, &[0.28, 0.39, 0.33]).unwrap();

        assert_eq!(report.eigenvalue, 5.46);
        assert_eq!(report.consistency_index, 1.23);
        assert_eq!(report.consistency_ratio, 2.12);
        assert!(!report.is_acceptable());
    }

    #[test]
    fn evaluate_rejects_wrong_weight_count() {
        let m = matrix(vec![vec![1.0; 3]; 3]);
        let result = ConsistencyEvaluator::evaluate(&m, &[0.5, 0.5]);
        assert_eq!(
            result,
            Err(AhpError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn evaluate_rejects_zero_weight() {
        let m = matrix(vec![vec![1.0; 3]; 3]);
        let result = ConsistencyEvaluator::evaluate(&m, &[0.5, 0.0, 0.5]);
        assert_eq!(result, Err(AhpError::DegenerateWeights { index: 1 }));
    }

    #[test]
    fn single_element_matrix_is_trivially_consistent() {
        let m = matrix(vec![vec![1.0]]);
        let report = ConsistencyEvaluator::evaluate(&m, &[1.0]).unwrap();
        assert_eq!(report.consistency_index, 0.0);
        assert_eq!(report.consistency_ratio, 0.0);
        assert!(report.is_acceptable());
    }

    #[test]
    fn two_by_two_matrix_has_zero_ratio() {
        // Deliberately non-reciprocal: CI is non-zero but RI(2) = 0.
        let m = matrix(vec![vec![1.0, 4.0], vec![1.0, 1.0]]);
        let report = ConsistencyEvaluator::evaluate(&m, &[0.67, 0.33]).unwrap();
        assert!(report.consistency_index > 0.0);
        assert_eq!(report.consistency_ratio, 0.0);
        assert!(report.is_acceptable());
    }

    #[test]
    fn acceptance_threshold_is_strict() {
        assert!(ConsistencyEvaluator::is_acceptable(0.09));
        assert!(ConsistencyEvaluator::is_acceptable(-0.05));
        assert!(!ConsistencyEvaluator::is_acceptable(0.1));
        assert!(!ConsistencyEvaluator::is_acceptable(0.35));
    }
}

//! Priority estimation and weight normalization.

use crate::domain::foundation::round2;

use super::{AhpError, ComparisonMatrix};

/// Derives the (unnormalized) priority vector of a comparison matrix.
pub struct PriorityEstimator;

impl PriorityEstimator {
    /// Computes the geometric mean of each row, rounded to two decimals.
    ///
    /// # Algorithm
    /// For each row: priority = (Π entries)^(1/N)
    pub fn estimate(matrix: &ComparisonMatrix) -> Vec<f64> {
        matrix
            .rows()
            .iter()
            .map(|row| Self::geometric_mean(row))
            .collect()
    }

    fn geometric_mean(row: &[f64]) -> f64 {
        let product: f64 = row.iter().product();
        round2(product.powf(1.0 / row.len() as f64))
    }
}

/// Scales a priority vector so its elements sum to one.
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// Divides each priority by the (unrounded) sum of all priorities,
    /// rounding every quotient to two decimals.
    ///
    /// # Errors
    /// Returns `DegenerateWeights` with the first index whose weight rounds to
    /// zero; later steps divide by every weight.
    pub fn normalize(priorities: &[f64]) -> Result<Vec<f64>, AhpError> {
        let sum = Self::sum(priorities);
        let weights: Vec<f64> = priorities.iter().map(|p| round2(p / sum)).collect();

        match weights.iter().position(|w| w.is_nan() || *w <= 0.0) {
            Some(index) => Err(AhpError::DegenerateWeights { index }),
            None => Ok(weights),
        }
    }

    /// Sum of the priority vector, as fed to [`WeightNormalizer::normalize`].
    pub fn sum(priorities: &[f64]) -> f64 {
        priorities.iter().sum()
    }
}

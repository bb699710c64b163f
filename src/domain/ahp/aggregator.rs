//! Multi-Criteria Aggregator - Combines per-criterion alternative weights
//! into a single ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::round2;

use super::AhpError;

/// Final ranking of a multi-criteria decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOutcome {
    /// Index of the alternative with the highest score (first on ties).
    pub best_alternative_index: usize,
    /// One aggregated score per alternative.
    pub scores: Vec<f64>,
    /// Weight of each criterion.
    pub criteria_weights: Vec<f64>,
    /// Alternative weights, one vector per criterion.
    pub alternative_weights: Vec<Vec<f64>>,
}

/// Weighted aggregation over already-solved weight vectors.
pub struct MultiCriteriaAggregator;

impl MultiCriteriaAggregator {
    /// Aggregates alternative weights by criterion importance.
    ///
    /// # Algorithm
    /// scores = [alternative weight vectors as columns] × [criteria weights as a column]
    ///
    /// # Errors
    /// `DimensionMismatch` when the number of alternative weight vectors differs
    /// from the number of criteria, or the vectors have different lengths.
    pub fn aggregate(
        criteria_weights: &[f64],
        alternative_weights: &[Vec<f64>],
    ) -> Result<VariantOutcome, AhpError> {
        let final_matrix = Self::create_final_matrix(alternative_weights)?;
        let weight_column = Self::create_final_matrix(&[criteria_weights.to_vec()])?;
        let product = Self::multiply_matrices(&final_matrix, &weight_column)?;
        let scores = Self::flatten(product);

        let best_alternative_index =
            Self::find_best_alternative(&scores).ok_or(AhpError::EmptyMatrix)?;

        Ok(VariantOutcome {
            best_alternative_index,
            scores,
            criteria_weights: criteria_weights.to_vec(),
            alternative_weights: alternative_weights.to_vec(),
        })
    }

    /// Stacks weight vectors as columns: row `i` holds element `i` of every vector.
    ///
    /// # Edge Cases
    /// - No vectors, or empty vectors: returns an empty matrix
    ///
    /// # Errors
    /// `DimensionMismatch` if a vector's length differs from the first one's.
    pub fn create_final_matrix(weights: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, AhpError> {
        let Some(first) = weights.first() else {
            return Ok(Vec::new());
        };
        let rows = first.len();

        if let Some(ragged) = weights.iter().find(|w| w.len() != rows) {
            return Err(AhpError::DimensionMismatch {
                expected: rows,
                actual: ragged.len(),
            });
        }

        Ok((0..rows)
            .map(|i| weights.iter().map(|w| w[i]).collect())
            .collect())
    }

    /// Multiplies `left` (n×k) by `right` (k×m).
    ///
    /// Each product is rounded to two decimals before being added, and every
    /// resulting cell is rounded again.
    ///
    /// # Errors
    /// `DimensionMismatch` if a row of `left` does not have one entry per row
    /// of `right`, or `right` is ragged.
    pub fn multiply_matrices(
        left: &[Vec<f64>],
        right: &[Vec<f64>],
    ) -> Result<Vec<Vec<f64>>, AhpError> {
        let inner = right.len();
        if let Some(row) = left.iter().find(|row| row.len() != inner) {
            return Err(AhpError::DimensionMismatch {
                expected: row.len(),
                actual: inner,
            });
        }

        let columns = right.first().map_or(0, Vec::len);
        if let Some(row) = right.iter().find(|row| row.len() != columns) {
            return Err(AhpError::DimensionMismatch {
                expected: columns,
                actual: row.len(),
            });
        }

        Ok(left
            .iter()
            .map(|row| {
                (0..columns)
                    .map(|column| {
                        let sum: f64 = row
                            .iter()
                            .zip(right)
                            .map(|(value, right_row)| round2(value * right_row[column]))
                            .sum();
                        round2(sum)
                    })
                    .collect()
            })
            .collect())
    }

    /// Concatenates the rows of a matrix into one sequence.
    pub fn flatten(matrix: Vec<Vec<f64>>) -> Vec<f64> {
        matrix.into_iter().flatten().collect()
    }

    /// Index of the highest score; the first one wins on ties.
    pub fn find_best_alternative(scores: &[f64]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (index, &score) in scores.iter().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        best.map(|(index, _)| index)
    }
}

//! Matrix Corrector - Pulls the least consistent row/column toward the
//! ratios implied by the current weight vector.

use crate::domain::foundation::round2;

use super::{AhpError, ComparisonMatrix};

/// Result of one correction step.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// Row (and column) that was replaced.
    pub worst_index: usize,
    /// The corrected matrix to re-solve.
    pub matrix: ComparisonMatrix,
}

/// Repairs inconsistent comparison matrices.
pub struct MatrixCorrector;

impl MatrixCorrector {
    /// Runs one full correction step.
    ///
    /// # Algorithm
    /// 1. Build the weight ratio matrix `w[i] / w[j]`
    /// 2. Build the delta matrix `|original - ratio|`
    /// 3. Pick the row with the largest delta sum
    /// 4. Replace that row with the ratio row and restore reciprocals in its column
    ///
    /// # Errors
    /// `DimensionMismatch` if `weights` does not match the matrix size.
    pub fn correct(matrix: &ComparisonMatrix, weights: &[f64]) -> Result<Correction, AhpError> {
        if weights.len() != matrix.size() {
            return Err(AhpError::DimensionMismatch {
                expected: matrix.size(),
                actual: weights.len(),
            });
        }

        let ratios = Self::weight_ratio_matrix(weights);
        let deltas = Self::delta_matrix(matrix, &ratios);
        let worst_index = Self::find_max_sum_index(&deltas).unwrap_or(0);
        let corrected = Self::corrected_matrix(matrix, &ratios, worst_index)?;

        Ok(Correction {
            worst_index,
            matrix: corrected,
        })
    }

    /// Entry `(i, j)` is `round2(weights[i] / weights[j])`.
    pub fn weight_ratio_matrix(weights: &[f64]) -> Vec<Vec<f64>> {
        weights
            .iter()
            .map(|wi| weights.iter().map(|wj| round2(wi / wj)).collect())
            .collect()
    }

    /// Entry `(i, j)` is `|round2(original[i][j] - ratios[i][j])|`.
    pub fn delta_matrix(matrix: &ComparisonMatrix, ratios: &[Vec<f64>]) -> Vec<Vec<f64>> {
        matrix
            .rows()
            .iter()
            .zip(ratios)
            .map(|(row, ratio_row)| {
                row.iter()
                    .zip(ratio_row)
                    .map(|(value, ratio)| round2(value - ratio).abs())
                    .collect()
            })
            .collect()
    }

    /// Index of the row with the largest sum; the first one wins on ties.
    ///
    /// Returns `None` for an empty matrix.
    pub fn find_max_sum_index(rows: &[Vec<f64>]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (index, row) in rows.iter().enumerate() {
            let sum: f64 = row.iter().sum();
            match best {
                Some((_, best_sum)) if sum <= best_sum => {}
                _ => best = Some((index, sum)),
            }
        }

        best.map(|(index, _)| index)
    }

    /// Builds the corrected matrix around `worst_index`.
    ///
    /// Row `worst_index` becomes the ratio row. In every other row only column
    /// `worst_index` changes, to `round2(1 / ratios[worst_index][row])`.
    pub fn corrected_matrix(
        matrix: &ComparisonMatrix,
        ratios: &[Vec<f64>],
        worst_index: usize,
    ) -> Result<ComparisonMatrix, AhpError> {
        let size = matrix.size();
        let mismatch = AhpError::DimensionMismatch {
            expected: size,
            actual: ratios.len(),
        };
        if ratios.len() != size || ratios.iter().any(|row| row.len() != size) {
            return Err(mismatch);
        }
        let worst_ratios = ratios.get(worst_index).ok_or(mismatch)?;

        let rows = matrix
            .rows()
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                if row_index == worst_index {
                    return worst_ratios.clone();
                }
                row.iter()
                    .enumerate()
                    .map(|(column, &value)| {
                        if column == worst_index {
                            round2(1.0 / worst_ratios[row_index])
                        } else {
                            value
                        }
                    })
                    .collect()
            })
            .collect();

        ComparisonMatrix::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inconsistent() -> ComparisonMatrix {
        ComparisonMatrix::new(vec![
            vec![1.0, 3.0, 0.2],
            vec![1.0 / 3.0, 1.0, 5.0],
            vec![5.0, 0.2, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn weight_ratio_matrix_rounds_each_ratio() {
        let ratios = MatrixCorrector::weight_ratio_matrix(&[0.28, 0.39, 0.33]);
        assert_eq!(
            ratios,
            vec![
                vec![1.0, 0.72, 0.85],
                vec![1.39, 1.0, 1.18],
                vec![1.18, 0.85, 1.0],
            ]
        );
    }

    #[test]
    fn delta_matrix_is_absolute_difference() {
        let m = ComparisonMatrix::new(vec![vec![1.0, 2.0], vec![0.25, 1.0]]).unwrap();
        let ratios = vec![vec![1.0, 3.0], vec![0.33, 1.0]];
        let deltas = MatrixCorrector::delta_matrix(&m, &ratios);
        assert_eq!(deltas, vec![vec![0.0, 1.0], vec![0.08, 0.0]]);
    }

    #[test]
    fn find_max_sum_index_picks_largest_row() {
        let rows = vec![vec![0.1, 0.2], vec![1.0, 2.0], vec![0.5, 0.5]];
        assert_eq!(MatrixCorrector::find_max_sum_index(&rows), Some(1));
    }

    #[test]
    fn find_max_sum_index_first_wins_on_tie() {
        let rows = vec![vec![1.0, 1.0], vec![2.0, 3.0], vec![3.0, 2.0]];
        assert_eq!(MatrixCorrector::find_max_sum_index(&rows), Some(1));

        let uniform = vec![vec![8.89; 3]; 3];
        assert_eq!(MatrixCorrector::find_max_sum_index(&uniform), Some(0));
    }

    #[test]
    fn find_max_sum_index_empty() {
        assert_eq!(MatrixCorrector::find_max_sum_index(&[]), None);
    }

    #[test]
    fn corrected_matrix_replaces_row_and_column() {
        let m = inconsistent();
        let ratios = MatrixCorrector::weight_ratio_matrix(&[0.28, 0.39, 0.33]);
        let corrected = MatrixCorrector::corrected_matrix(&m, &ratios, 1).unwrap();

        assert_eq!(
            corrected.rows(),
            &[
                vec![1.0, 0.72, 0.2],
                vec![1.39, 1.0, 1.18],
                vec![5.0, 0.85, 1.0],
            ]
        );
    }

    #[test]
    fn correct_selects_worst_row() {
        let correction = MatrixCorrector::correct(&inconsistent(), &[0.28, 0.39, 0.33]).unwrap();

        // Delta row sums are 2.93, 4.88 and 4.47.
        assert_eq!(correction.worst_index, 1);
        assert_eq!(correction.matrix.get(1, 2), Some(1.18));
        assert_eq!(correction.matrix.get(2, 1), Some(0.85));
        assert_eq!(correction.matrix.get(0, 2), Some(0.2));
    }

    #[test]
    fn correct_rejects_wrong_weight_count() {
        let result = MatrixCorrector::correct(&inconsistent(), &[0.5, 0.5]);
        assert!(matches!(result, Err(AhpError::DimensionMismatch { .. })));
    }

    #[test]
    fn corrected_matrix_rejects_out_of_range_index() {
        let m = inconsistent();
        let ratios = MatrixCorrector::weight_ratio_matrix(&[0.28, 0.39, 0.33]);
        let result = MatrixCorrector::corrected_matrix(&m, &ratios, 5);
        assert!(matches!(result, Err(AhpError::DimensionMismatch { .. })));
    }
}

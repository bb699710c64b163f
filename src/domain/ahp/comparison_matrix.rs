//! Comparison Matrix - Square matrix of pairwise importance ratios.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// Largest matrix size covered by the random consistency index table.
pub const MAX_MATRIX_SIZE: usize = 10;

/// An N×N matrix of pairwise judgments.
///
/// Entry `(i, j)` states how much more important item `i` is than item `j`.
/// Construction guarantees the matrix is non-empty, square, no larger than
/// [`MAX_MATRIX_SIZE`] and that every entry is finite and positive. The
/// reciprocal relationship `(j, i) = 1 / (i, j)` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Validates and wraps nested rows.
    ///
    /// # Errors
    ///
    /// - `EmptyMatrix` when there are no rows
    /// - `UnsupportedSize` when there are more than [`MAX_MATRIX_SIZE`] rows
    /// - `NotSquare` for the first row whose length differs from the row count
    /// - `NonFiniteEntry` / `NonPositiveEntry` for the first offending cell
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let size = rows.len();
        if size == 0 {
            return Err(AhpError::EmptyMatrix);
        }
        if size > MAX_MATRIX_SIZE {
            return Err(AhpError::UnsupportedSize {
                size,
                max: MAX_MATRIX_SIZE,
            });
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(AhpError::NotSquare {
                    row: row_index,
                    expected: size,
                    actual: row.len(),
                });
            }
            for (column, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AhpError::NonFiniteEntry {
                        row: row_index,
                        column,
                    });
                }
                if value <= 0.0 {
                    return Err(AhpError::NonPositiveEntry {
                        row: row_index,
                        column,
                        value,
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Wraps rows that are known to satisfy the matrix invariants.
    pub(super) fn from_trusted_rows(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(Self::new(rows.clone()).is_ok());
        Self { rows }
    }

    /// Builds the fully consistent matrix implied by `weights`.
    ///
    /// Entry `(i, j)` is `weights[i] / weights[j]`, kept at full precision.
    pub fn from_weights(weights: &[f64]) -> Result<Self, AhpError> {
        let rows = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wi / wj).collect())
            .collect();
        Self::new(rows)
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns a single row.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the entry at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for ComparisonMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<ComparisonMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ComparisonMatrix) -> Self {
        matrix.into_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_square_positive_matrix() {
        let matrix = ComparisonMatrix::new(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![0.2, 1.0 / 3.0, 1.0],
        ])
        .unwrap();

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.get(0, 2), Some(5.0));
        assert_eq!(matrix.row(2), Some(&[0.2, 1.0 / 3.0, 1.0][..]));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn rejects_empty_matrix() {
        assert_eq!(ComparisonMatrix::new(vec![]), Err(AhpError::EmptyMatrix));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = ComparisonMatrix::new(vec![vec![1.0, 2.0], vec![0.5]]);
        assert_eq!(
            result,
            Err(AhpError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn rejects_non_square_matrix() {
        let result = ComparisonMatrix::new(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 2.0]]);
        assert!(matches!(result, Err(AhpError::NotSquare { row: 0, .. })));
    }

    #[test]
    fn rejects_zero_and_negative_entries() {
        let zero = ComparisonMatrix::new(vec![vec![1.0, 0.0], vec![2.0, 1.0]]);
        assert_eq!(
            zero,
            Err(AhpError::NonPositiveEntry {
                row: 0,
                column: 1,
                value: 0.0
            })
        );

        let negative = ComparisonMatrix::new(vec![vec![1.0, 2.0], vec![-0.5, 1.0]]);
        assert!(matches!(
            negative,
            Err(AhpError::NonPositiveEntry { row: 1, column: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_entries() {
        let result = ComparisonMatrix::new(vec![vec![1.0, f64::NAN], vec![1.0, 1.0]]);
        assert_eq!(result, Err(AhpError::NonFiniteEntry { row: 0, column: 1 }));

        let result = ComparisonMatrix::new(vec![vec![1.0, 1.0], vec![f64::INFINITY, 1.0]]);
        assert_eq!(result, Err(AhpError::NonFiniteEntry { row: 1, column: 0 }));
    }

    #[test]
    fn rejects_matrices_larger_than_index_table() {
        let rows = vec![vec![1.0; 11]; 11];
        assert_eq!(
            ComparisonMatrix::new(rows),
            Err(AhpError::UnsupportedSize { size: 11, max: 10 })
        );
    }

    #[test]
    fn from_weights_builds_ratio_matrix() {
        let matrix = ComparisonMatrix::from_weights(&[0.5, 0.25, 0.25]).unwrap();
        assert_eq!(matrix.get(0, 1), Some(2.0));
        assert_eq!(matrix.get(1, 0), Some(0.5));
        assert_eq!(matrix.get(2, 2), Some(1.0));
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let matrix: ComparisonMatrix = serde_json::from_str("[[1, 2], [0.5, 1]]").unwrap();
        assert_eq!(matrix.rows(), &[vec![1.0, 2.0], vec![0.5, 1.0]]);
    }

    #[test]
    fn deserialization_validates_entries() {
        let result: Result<ComparisonMatrix, _> = serde_json::from_str("[[1, -2], [0.5, 1]]");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let matrix = ComparisonMatrix::new(vec![vec![1.0, 4.0], vec![0.25, 1.0]]).unwrap();
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[1.0,4.0],[0.25,1.0]]");
    }
}

//! Variant - One complete multi-criteria decision problem.

use serde::{Deserialize, Serialize};

use super::{AhpError, AhpSolver, ComparisonMatrix, VariantOutcome};

/// A criteria-importance matrix plus one alternative matrix per criterion.
///
/// Serialized as:
///
/// ```json
/// { "criteria": [[1, 2], [0.5, 1]], "alternatives": [[[1, 3], [0.33, 1]], [[1, 1], [1, 1]]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub criteria: ComparisonMatrix,
    pub alternatives: Vec<ComparisonMatrix>,
}

impl Variant {
    /// Creates a variant from already validated matrices.
    pub fn new(criteria: ComparisonMatrix, alternatives: Vec<ComparisonMatrix>) -> Self {
        Self {
            criteria,
            alternatives,
        }
    }

    /// Worked example: four criteria, three alternatives.
    pub fn sample() -> Self {
        const THIRD: f64 = 1.0 / 3.0;
        const SIXTH: f64 = 1.0 / 6.0;

        let criteria = vec![
            vec![1.0, 4.0, 0.25, 0.5],
            vec![0.25, 1.0, 0.25, 0.2],
            vec![4.0, 4.0, 1.0, 2.0],
            vec![2.0, 5.0, 0.5, 1.0],
        ];
        let alternatives = vec![
            vec![
                vec![1.0, 2.0, 1.0],
                vec![0.5, 1.0, 0.5],
                vec![1.0, 2.0, 1.0],
            ],
            vec![
                vec![1.0, 3.0, 5.0],
                vec![THIRD, 1.0, 3.0],
                vec![0.2, THIRD, 1.0],
            ],
            vec![
                vec![1.0, 4.0, THIRD],
                vec![0.25, 1.0, SIXTH],
                vec![3.0, 6.0, 1.0],
            ],
            vec![
                vec![1.0, THIRD, 1.0],
                vec![3.0, 1.0, 3.0],
                vec![1.0, THIRD, 1.0],
            ],
        ];

        Self {
            criteria: ComparisonMatrix::from_trusted_rows(criteria),
            alternatives: alternatives
                .into_iter()
                .map(ComparisonMatrix::from_trusted_rows)
                .collect(),
        }
    }

    /// Number of criteria.
    pub fn criteria_count(&self) -> usize {
        self.criteria.size()
    }

    /// Number of alternatives, taken from the first alternative matrix.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.first().map_or(0, ComparisonMatrix::size)
    }

    /// Solves the variant with the given solver.
    pub fn solve(&self, solver: &AhpSolver) -> Result<VariantOutcome, AhpError> {
        solver.solve_variant(&self.criteria, &self.alternatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_four_criteria_and_three_alternatives() {
        let variant = Variant::sample();
        assert_eq!(variant.criteria_count(), 4);
        assert_eq!(variant.alternatives.len(), 4);
        assert_eq!(variant.alternative_count(), 3);
    }

    #[test]
    fn sample_matrices_pass_validation() {
        let variant = Variant::sample();
        assert!(ComparisonMatrix::new(variant.criteria.clone().into_rows()).is_ok());
        for matrix in &variant.alternatives {
            assert!(ComparisonMatrix::new(matrix.clone().into_rows()).is_ok());
        }
    }

    #[test]
    fn sample_selects_third_alternative() {
        let outcome = Variant::sample().solve(&AhpSolver::default()).unwrap();

        assert_eq!(outcome.criteria_weights, vec![0.17, 0.07, 0.47, 0.3]);
        assert_eq!(
            outcome.alternative_weights,
            vec![
                vec![0.4, 0.2, 0.4],
                vec![0.64, 0.26, 0.11],
                vec![0.27, 0.09, 0.64],
                vec![0.2, 0.6, 0.2],
            ]
        );
        assert_eq!(outcome.scores, vec![0.3, 0.27, 0.44]);
        assert_eq!(outcome.best_alternative_index, 2);
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "criteria": [[1, 2], [0.5, 1]],
            "alternatives": [[[1, 3], [0.3333333333333333, 1]], [[1, 1], [1, 1]]]
        }"#;

        let variant: Variant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.criteria_count(), 2);
        assert_eq!(variant.alternative_count(), 2);
    }

    #[test]
    fn deserialization_rejects_ragged_matrix() {
        let json = r#"{ "criteria": [[1, 2], [0.5]], "alternatives": [] }"#;
        let result: Result<Variant, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

//! AHP solver error types.
//!
//! # Domain Error Mapping
//!
//! | Error | ErrorCode |
//! |-------|-----------|
//! | EmptyMatrix | ValidationFailed |
//! | NotSquare | ValidationFailed |
//! | NonPositiveEntry | ValidationFailed |
//! | NonFiniteEntry | ValidationFailed |
//! | UnsupportedSize | ValidationFailed |
//! | DegenerateWeights | DegenerateWeights |
//! | DimensionMismatch | DimensionMismatch |
//! | DidNotConverge | NotConverged |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while validating or solving comparison matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Comparison matrix has no rows")]
    EmptyMatrix,

    #[error("Comparison matrix row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Comparison matrix entry ({row}, {column}) must be positive, got {value}")]
    NonPositiveEntry { row: usize, column: usize, value: f64 },

    #[error("Comparison matrix entry ({row}, {column}) is not a finite number")]
    NonFiniteEntry { row: usize, column: usize },

    #[error("Comparison matrix size {size} is outside the supported range 1..={max}")]
    UnsupportedSize { size: usize, max: usize },

    #[error("Weight at index {index} rounds to zero")]
    DegenerateWeights { index: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error(
        "Consistency ratio {consistency_ratio} is still unacceptable after {iterations} iterations"
    )]
    DidNotConverge {
        iterations: u32,
        consistency_ratio: f64,
    },
}

impl AhpError {
    /// Returns the domain error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::EmptyMatrix
            | AhpError::NotSquare { .. }
            | AhpError::NonPositiveEntry { .. }
            | AhpError::NonFiniteEntry { .. }
            | AhpError::UnsupportedSize { .. } => ErrorCode::ValidationFailed,
            AhpError::DegenerateWeights { .. } => ErrorCode::DegenerateWeights,
            AhpError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AhpError::DidNotConverge { .. } => ErrorCode::NotConverged,
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

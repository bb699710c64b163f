//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the fixed-precision rounding helpers
//! that every analysis step relies on.

mod errors;
mod rounding;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use rounding::{round2, round_to_digits, PIPELINE_DIGITS};

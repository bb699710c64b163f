//! Fixed-precision rounding used at every step of the AHP pipeline.
//!
//! Every intermediate result is rounded to two decimals as soon as it is
//! computed, so downstream steps consume the same values a hand-computed
//! worksheet would. Rounding is half-up (toward positive infinity on ties),
//! including for negative inputs.

/// Number of decimal digits kept after every arithmetic step.
pub const PIPELINE_DIGITS: i32 = 2;

/// Rounds `value` to `digits` decimal places, ties rounding up.
///
/// `f64::EPSILON` is added first so values such as `1.005`, which are stored
/// slightly below the midpoint, still round up.
pub fn round_to_digits(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    ((value + f64::EPSILON) * factor + 0.5).floor() / factor
}

/// Rounds `value` to the pipeline precision (two decimals).
pub fn round2(value: f64) -> f64 {
    round_to_digits(value, PIPELINE_DIGITS)
}

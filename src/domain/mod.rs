//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, rounding)
//! - `ahp` - Pure Analytic Hierarchy Process services (priorities, consistency,
//!   correction, multi-criteria aggregation)

pub mod ahp;
pub mod foundation;

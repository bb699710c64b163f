//! Analysis query handlers.
//!
//! Handlers that load decision data through ports and run the AHP solver.

mod solve_variant;

pub use solve_variant::{SolveVariantHandler, SolveVariantQuery, SolveVariantResult};

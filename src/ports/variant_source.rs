//! VariantSource port - Where decision variants come from.
//!
//! The solver itself is pure; this port lets the application layer obtain a
//! variant (criteria matrix plus alternative matrices) from a fixed dataset,
//! a file, or any future input channel without the domain knowing which.

use crate::domain::ahp::Variant;
use crate::domain::foundation::DomainError;

/// Port for loading a decision variant.
///
/// Implementations must:
/// - Return matrices that passed `ComparisonMatrix` validation
/// - Report missing or unreadable data as `DatasetUnavailable`
/// - Report malformed content as `InvalidFormat`
pub trait VariantSource: Send + Sync {
    /// Load the variant.
    fn load(&self) -> Result<Variant, DomainError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `variant` - Variant sources (built-in worksheet, JSON/YAML files)

pub mod variant;

pub use variant::{BuiltinVariantSource, FileVariantSource, VariantFileFormat};

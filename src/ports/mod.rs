//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Dataset Ports
//!
//! - `VariantSource` - Supplies comparison matrices for a decision variant

mod variant_source;

pub use variant_source::VariantSource;

//! Built-in Variant Source
//!
//! Serves the worked example dataset compiled into the binary.

use crate::domain::ahp::Variant;
use crate::domain::foundation::DomainError;
use crate::ports::VariantSource;

/// Serves [`Variant::sample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinVariantSource;

impl BuiltinVariantSource {
    pub fn new() -> Self {
        Self
    }
}

impl VariantSource for BuiltinVariantSource {
    fn load(&self) -> Result<Variant, DomainError> {
        Ok(Variant::sample())
    }

    fn describe(&self) -> String {
        "built-in sample variant".to_string()
    }
}

//! Variant source adapters.

mod builtin;
mod file;

pub use builtin::BuiltinVariantSource;
pub use file::{FileVariantSource, VariantFileFormat};

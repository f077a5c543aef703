//! Catalog module for schema_split
//!
//! This module holds the table specification types and the built-in catalog
//! the emitter runs over.

pub mod tables;
pub mod types;

// Re-export key types
pub use tables::builtin;
pub use types::{Catalog, IndexSpec, TableSpec};

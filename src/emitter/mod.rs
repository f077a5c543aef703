//! Emitter module for schema_split
//!
//! This module turns table specifications into SQL text and writes the
//! per-table file tree.

pub mod generator;
pub mod writer;

// Re-export key types
pub use writer::{EmitEntry, EmitReport, SchemaEmitter};

//! schema_split: splits a monolithic database schema into per-table SQL files
//!
//! schema_split carries a fixed catalog of table specifications and, in a
//! single pass, materializes each one as a directory of SQL files: a CREATE
//! TABLE statement, one file per index, and an updated_at trigger where the
//! table has such a column. Run it during schema authoring; re-runs overwrite
//! the same files with the same bytes.

pub mod catalog;
pub mod config;
pub mod emitter;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test;

// Re-export main types for easier access
pub use catalog::types::{Catalog, IndexSpec, TableSpec};
pub use config::Config;
pub use emitter::writer::{EmitReport, SchemaEmitter};
pub use error::{Error, Result};

/// Run the emitter over the built-in catalog with the given configuration
pub fn run(config: &Config) -> Result<EmitReport> {
    let catalog = catalog::tables::builtin();
    let emitter = SchemaEmitter::new(&config.output);
    emitter.emit_all(catalog)
}

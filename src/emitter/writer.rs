//! File emission
//!
//! This module walks the catalog once and writes each generated SQL file into
//! the sql/02-tables/ layout, collecting a report of everything written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::types::{Catalog, TableSpec};
use crate::config::OutputConfig;
use crate::emitter::generator;
use crate::error::Result;

/// Root of the emitted tree, relative to the output root
///
/// Other tooling depends on this layout; changing it is a breaking change.
pub const TABLES_DIR: &str = "sql/02-tables";

/// One file produced by an emitter run
#[derive(Debug, Clone)]
pub struct EmitEntry {
    /// Path relative to the output root
    pub path: PathBuf,
    pub bytes: usize,
    /// MD5 digest of the file content, for idempotence checks
    pub digest: String,
}

/// Summary of an emitter run
#[derive(Debug, Default)]
pub struct EmitReport {
    pub entries: Vec<EmitEntry>,
}

impl EmitReport {
    /// Number of files produced (or, in a dry run, that would be produced)
    pub fn files_written(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report contains the given relative path
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == Path::new(path))
    }
}

/// Writes the per-table SQL file tree for a catalog
pub struct SchemaEmitter<'a> {
    config: &'a OutputConfig,
}

impl<'a> SchemaEmitter<'a> {
    /// Create a new emitter over the given output configuration
    pub fn new(config: &'a OutputConfig) -> Self {
        Self { config }
    }

    /// Emit every file for every table in the catalog
    ///
    /// Single pass in catalog order. The first I/O error aborts the run; the
    /// completion message is printed only if every write succeeded.
    pub fn emit_all(&self, catalog: &Catalog) -> Result<EmitReport> {
        catalog.validate()?;

        let mut report = EmitReport::default();

        for table in catalog.tables.values() {
            self.emit_table(table, &mut report)?;
        }

        println!("SQL file generation complete!");
        tracing::debug!(files = report.files_written(), "emit finished");

        Ok(report)
    }

    /// Emit table.sql, the index files, and the optional trigger file for one table
    fn emit_table(&self, table: &TableSpec, report: &mut EmitReport) -> Result<()> {
        let table_dir = Path::new(TABLES_DIR).join(&table.name);

        self.write_file(
            &table_dir.join("table.sql"),
            &generator::table_sql(table),
            report,
        )?;

        for index in &table.indexes {
            let path = table_dir
                .join("indexes")
                .join(format!("{}.sql", index.name));
            self.write_file(&path, &generator::index_sql(table, index), report)?;
        }

        if let Some(trigger) = generator::trigger_sql(table) {
            let path = table_dir.join("triggers").join("update_updated_at.sql");
            self.write_file(&path, &trigger, report)?;
        } else {
            tracing::debug!(table = %table.name, "no updated_at column, skipping trigger");
        }

        Ok(())
    }

    /// Write one file under the output root, creating parent directories
    fn write_file(&self, relative: &Path, content: &str, report: &mut EmitReport) -> Result<()> {
        if self.config.dry_run {
            tracing::info!(
                path = %relative.display(),
                bytes = content.len(),
                "dry run, skipping write"
            );
        } else {
            let full_path = self.config.root.join(relative);

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(&full_path, content)?;
            println!("Creating: {}", relative.display());
        }

        report.entries.push(EmitEntry {
            path: relative.to_path_buf(),
            bytes: content.len(),
            digest: format!("{:x}", md5::compute(content)),
        });

        Ok(())
    }
}

//! SQL text generation
//!
//! This module builds the DDL text for table, index, and trigger files from a
//! table specification. Output is fixed-shape DDL, so plain string templating
//! is enough; there is no SQL AST.

use crate::catalog::types::{IndexSpec, TableSpec};
use crate::utils::naming;

/// Generate the contents of a table.sql file
///
/// A title comment, the descriptive comment, the CREATE TABLE statement with
/// the raw column block, and a trailing COMMENT ON TABLE statement.
pub fn table_sql(table: &TableSpec) -> String {
    format!(
        "-- {} Table\n\
         -- {}\n\
         CREATE TABLE IF NOT EXISTS {} (\n\
         {}\n\
         );\n\
         \n\
         -- Add table comment\n\
         COMMENT ON TABLE {} IS '{}';",
        naming::table_title(&table.name),
        table.comment,
        table.name,
        table.columns,
        table.name,
        table.comment.replace('\'', "''"),
    )
}

/// Generate the contents of one index file
pub fn index_sql(table: &TableSpec, index: &IndexSpec) -> String {
    format!(
        "-- Index on {}\n\
         CREATE INDEX IF NOT EXISTS {} ON {}({});",
        index.columns, index.name, table.name, index.columns,
    )
}

/// Generate the updated_at trigger file, if the table needs one
///
/// The trigger calls the shared update_updated_at_column() function, which is
/// defined elsewhere in the schema.
pub fn trigger_sql(table: &TableSpec) -> Option<String> {
    if !table.has_updated_at() {
        return None;
    }

    Some(format!(
        "-- Trigger to automatically update the updated_at timestamp\n\
         CREATE TRIGGER {}\n  BEFORE UPDATE ON {}\n  FOR EACH ROW\n  EXECUTE FUNCTION update_updated_at_column();",
        naming::trigger_name(&table.name),
        table.name,
    ))
}

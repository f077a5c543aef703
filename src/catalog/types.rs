//! Type definitions for table specifications

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::naming;

/// Column text that marks a table as carrying an updated_at timestamp
const UPDATED_AT_MARKER: &str = "updated_at TIMESTAMPTZ";

/// Represents a named index over a column expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    /// Raw column expression, e.g. `"last_name, first_name"` or `"created_at DESC"`
    pub columns: String,
}

impl IndexSpec {
    /// Create a new index specification
    pub fn new(name: &str, columns: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.to_string(),
        }
    }
}

/// Represents one table's specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    /// Raw DDL column block, emitted verbatim inside CREATE TABLE
    pub columns: String,
    pub indexes: Vec<IndexSpec>,
    pub comment: String,
}

impl TableSpec {
    /// Create a new table specification with no indexes
    pub fn new(name: &str, columns: &str, comment: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.to_string(),
            indexes: Vec::new(),
            comment: comment.to_string(),
        }
    }

    /// Append an index to the specification
    pub fn with_index(mut self, name: &str, columns: &str) -> Self {
        self.indexes.push(IndexSpec::new(name, columns));
        self
    }

    /// True when the column block declares an updated_at timestamp
    pub fn has_updated_at(&self) -> bool {
        self.columns.contains(UPDATED_AT_MARKER)
    }
}

/// Ordered mapping from table name to specification
///
/// Insertion order is preserved so emitted files always come out in catalog
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub tables: IndexMap<String, TableSpec>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the catalog, rejecting duplicate names
    pub fn add_table(&mut self, table: TableSpec) -> Result<()> {
        if self.tables.contains_key(&table.name) {
            return Err(Error::ValidationError(format!(
                "duplicate table name '{}'",
                table.name
            )));
        }

        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// Number of tables in the catalog
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the catalog holds no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Check the catalog invariants before any file is written
    ///
    /// The built-in catalog is trusted literal data, but the check is cheap
    /// and runs once per process.
    pub fn validate(&self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(Error::ValidationError("catalog contains no tables".into()));
        }

        for (key, table) in &self.tables {
            if key != &table.name {
                return Err(Error::ValidationError(format!(
                    "table '{}' is registered under key '{}'",
                    table.name, key
                )));
            }

            if !naming::is_valid_identifier(&table.name) {
                return Err(Error::ValidationError(format!(
                    "'{}' is not a valid table identifier",
                    table.name
                )));
            }

            if table.columns.trim().is_empty() {
                return Err(Error::ValidationError(format!(
                    "table '{}' has an empty column block",
                    table.name
                )));
            }

            for index in &table.indexes {
                if !naming::is_valid_identifier(&index.name) {
                    return Err(Error::ValidationError(format!(
                        "'{}' is not a valid index identifier on table '{}'",
                        index.name, table.name
                    )));
                }
            }
        }

        Ok(())
    }
}

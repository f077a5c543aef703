//! Naming utilities for emitted SQL
//!
//! Helpers for deriving the handful of names the emitter needs from a table
//! name.

use inflector::Inflector;

/// Human-readable title for a table header comment
///
/// `"medication_history"` becomes `"Medication History"`.
pub fn table_title(table_name: &str) -> String {
    table_name.to_title_case()
}

/// Name of the updated_at maintenance trigger for a table
pub fn trigger_name(table_name: &str) -> String {
    format!("update_{}_updated_at", table_name)
}

/// Whether a name is usable as an unquoted SQL identifier
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

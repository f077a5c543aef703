//! Utilities for schema_split
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use naming::{is_valid_identifier, table_title, trigger_name};

//! Logging utilities for schema_split
//!
//! This module provides logging setup and configuration.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize logging based on configuration
///
/// Diagnostics go to stderr: stdout is reserved for the per-file progress
/// lines that downstream tooling scrapes.
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(()), // No logging configuration, stay silent
    };

    // Parse log level
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // Default to INFO
    };

    // Create filter for the level
    let directive = format!("schema_split={}", level)
        .parse()
        .map_err(|e: tracing_subscriber::filter::ParseError| Error::ConfigError(e.to_string()))?;
    let env_filter = EnvFilter::from_default_env().add_directive(directive);

    if config.format.eq_ignore_ascii_case("json") {
        let subscriber = fmt::Subscriber::builder()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
    }

    Ok(())
}

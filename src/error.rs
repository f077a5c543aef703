//! Error types for schema_split

use thiserror::Error;

/// Result type for schema_split operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for schema_split
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convert TOML deserialization errors to schema_split errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}

//! Error types for configuration handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for trustreg-utils
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Configuration file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

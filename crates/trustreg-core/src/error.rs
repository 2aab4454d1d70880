//! Error types for trustreg-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for trustreg-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for loading and scoring decision tables
#[derive(Error, Debug)]
pub enum Error {
    /// The CSV file does not exist
    #[error("Decision data not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// A required column is absent from the header row
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// A cell could not be interpreted
    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingColumn("TrustReg_v3".to_string());
        assert_eq!(err.to_string(), "Missing column 'TrustReg_v3'");

        let err = Error::InvalidValue {
            column: "binary_violation".to_string(),
            row: 3,
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'maybe' in column 'binary_violation' at row 3"
        );
    }
}

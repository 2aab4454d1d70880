//! Error types for dashboard rendering

use crate::section::Section;
use thiserror::Error;

/// Result type alias for trustreg-dashboard
pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Loading or scoring the decision table failed
    #[error(transparent)]
    Data(#[from] trustreg_core::Error),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] trustreg_utils::ConfigError),

    /// The section was asked to build without a decision table
    #[error("Section '{0}' requires decision data")]
    DataRequired(Section),

    /// Section name did not match any menu entry
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    /// Output format name not recognised
    #[error("Unknown output format '{0}'")]
    UnknownFormat(String),

    /// HTML template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

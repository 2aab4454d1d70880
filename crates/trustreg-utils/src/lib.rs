//! Shared utilities for the TrustReg dashboard
//!
//! This crate provides logging setup and the dashboard configuration used
//! across the workspace.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{DashboardConfig, DashboardConfigBuilder, ModelVariant, ReferenceResult};
pub use error::{ConfigError, Result};
pub use logging::init_tracing;

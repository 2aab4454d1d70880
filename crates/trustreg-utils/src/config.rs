//! Dashboard configuration

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the model comparison export
pub const DATA_FILE: &str = "trustreg_model_comparison.csv";

/// Directory the modeling pipeline writes into
pub const OUTPUTS_DIR: &str = "outputs";

/// Environment variable overriding the data path
pub const ENV_DATA: &str = "TRUSTREG_DATA";

/// Environment variable overriding the primary decision column
pub const ENV_PRIMARY_COLUMN: &str = "TRUSTREG_PRIMARY_COLUMN";

/// One governance model variant and the CSV column holding its decisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelVariant {
    /// Decision column name
    pub column: String,
    /// Name used in tables
    pub label: String,
    /// Name used on chart axes
    pub short_label: String,
}

impl ModelVariant {
    pub fn new(
        column: impl Into<String>,
        label: impl Into<String>,
        short_label: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
            short_label: short_label.into(),
        }
    }
}

/// A row of the reported held-out test set comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceResult {
    pub model: String,
    pub harm: u64,
    pub utility: u64,
}

impl ReferenceResult {
    pub fn new(model: impl Into<String>, harm: u64, utility: u64) -> Self {
        Self {
            model: model.into(),
            harm,
            utility,
        }
    }
}

/// Configuration for dashboard rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title
    pub title: String,

    /// Explicit CSV path; when unset the `outputs/` lookup applies
    pub data_path: Option<PathBuf>,

    /// Decision column featured on the overview, decision and tradeoff sections
    pub primary_column: String,

    /// Model variants compared on the model comparison section
    pub models: Vec<ModelVariant>,

    /// Rows shown by the raw data preview
    pub preview_rows: usize,

    /// Reported test set results shown alongside the computed metrics
    pub reference_results: Vec<ReferenceResult>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "TrustReg Governance Dashboard".to_string(),
            data_path: None,
            primary_column: "TrustReg_v3".to_string(),
            models: vec![
                ModelVariant::new("TrustReg_v3", "Linear Regression", "Linear"),
                ModelVariant::new("TrustReg_rf", "Random Forest", "Random Forest"),
                ModelVariant::new("TrustReg_xgb", "XGBoost", "XGBoost"),
            ],
            preview_rows: 100,
            reference_results: vec![
                ReferenceResult::new("Linear Regression", 740, 427),
                ReferenceResult::new("Random Forest", 676, 461),
                ReferenceResult::new("XGBoost", 684, 533),
            ],
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Load a JSON configuration file; absent fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded dashboard config");
        config.validate()?;
        Ok(config)
    }

    /// Apply `TRUSTREG_DATA` and `TRUSTREG_PRIMARY_COLUMN` from the environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_DATA).filter(|v| !v.is_empty()) {
            self.data_path = Some(PathBuf::from(path));
        }
        if let Some(column) = lookup(ENV_PRIMARY_COLUMN).filter(|v| !v.is_empty()) {
            self.primary_column = column;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.primary_column.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "primary_column must not be empty".to_string(),
            ));
        }

        if self.models.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one model variant is required".to_string(),
            ));
        }

        if self.preview_rows == 0 {
            return Err(ConfigError::Invalid(
                "preview_rows must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if !seen.insert(model.column.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate model column '{}'",
                    model.column
                )));
            }
        }

        Ok(())
    }

    /// Locate the decision CSV
    ///
    /// An explicit `data_path` is used as given (relative paths resolve
    /// against `cwd`). Otherwise `cwd/outputs/<file>` is preferred, falling
    /// back to the same location one directory up.
    pub fn resolve_data_path(&self, cwd: &Path) -> PathBuf {
        if let Some(path) = &self.data_path {
            return cwd.join(path);
        }

        let candidate = cwd.join(OUTPUTS_DIR).join(DATA_FILE);
        if candidate.exists() {
            return candidate;
        }

        let fallback = cwd.parent().unwrap_or(cwd).join(OUTPUTS_DIR).join(DATA_FILE);
        warn!(
            missing = %candidate.display(),
            fallback = %fallback.display(),
            "Decision data not in working directory, trying parent"
        );
        fallback
    }

    /// Human-readable name of a decision column (`TrustReg_v3` -> `TrustReg v3`)
    pub fn display_name(column: &str) -> String {
        column.replace('_', " ")
    }
}

/// Builder for DashboardConfig
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    title: Option<String>,
    data_path: Option<PathBuf>,
    primary_column: Option<String>,
    models: Option<Vec<ModelVariant>>,
    preview_rows: Option<usize>,
    reference_results: Option<Vec<ReferenceResult>>,
}

impl DashboardConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set an explicit CSV path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    pub fn primary_column(mut self, column: impl Into<String>) -> Self {
        self.primary_column = Some(column.into());
        self
    }

    /// Replace the compared model variants
    pub fn models(mut self, models: Vec<ModelVariant>) -> Self {
        self.models = Some(models);
        self
    }

    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    pub fn reference_results(mut self, results: Vec<ReferenceResult>) -> Self {
        self.reference_results = Some(results);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let config = DashboardConfig {
            title: self.title.unwrap_or(defaults.title),
            data_path: self.data_path.or(defaults.data_path),
            primary_column: self.primary_column.unwrap_or(defaults.primary_column),
            models: self.models.unwrap_or(defaults.models),
            preview_rows: self.preview_rows.unwrap_or(defaults.preview_rows),
            reference_results: self.reference_results.unwrap_or(defaults.reference_results),
        };

        config.validate()?;
        Ok(config)
    }
}

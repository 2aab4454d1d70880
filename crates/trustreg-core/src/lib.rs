//! Core data model and scoring for the TrustReg governance dashboard
//!
//! This crate loads the model-comparison CSV into a read-only [`DecisionTable`]
//! and provides the harm/utility scoring used by every dashboard section.

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod scoring;

pub use dataset::{DecisionTable, VIOLATION_COLUMN};
pub use error::{Error, Result};
pub use metrics::{Confusion, DecisionMetrics, RowScore, compute_metrics, confusion, row_scores};
pub use scoring::{APPROVE, decision_harm, decision_utility, prediction_of};

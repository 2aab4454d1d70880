//! TrustReg governance dashboard
//!
//! Builds dashboard pages from a [`trustreg_core::DecisionTable`] and renders
//! them for the terminal, as a self-contained HTML document with inline SVG
//! charts, or as JSON.
//!
//! # Architecture
//!
//! - [`Section`]: the navigable dashboard sections, in menu order
//! - [`sections`]: one page builder per section
//! - [`page`] and [`chart`]: format-independent page content
//! - [`render`]: a [`Renderer`] per [`OutputFormat`]
//! - [`Dashboard`]: resolves the data file, loads it per render and ties the
//!   pieces together
//!
//! # Example
//!
//! ```rust,ignore
//! use trustreg_dashboard::{Dashboard, OutputFormat, Section};
//! use trustreg_utils::DashboardConfig;
//!
//! let dashboard = Dashboard::new(DashboardConfig::default(), &std::env::current_dir()?);
//! let output = dashboard.render(&[Section::ModelComparison], OutputFormat::Terminal)?;
//! println!("{output}");
//! ```

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod page;
pub mod render;
pub mod section;
pub mod sections;

pub use chart::{Bar, BarChart, Chart, ScatterChart, ScatterPoint};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use page::{Block, Document, Page, TableBlock};
pub use render::{OutputFormat, Renderer, RendererFactory};
pub use section::Section;

//! Output renderers

mod html;
mod json;
mod terminal;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use terminal::TerminalRenderer;

use crate::error::{DashboardError, Result};
use crate::page::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables and text charts for a terminal
    #[default]
    Terminal,
    /// Self-contained HTML page with inline SVG charts
    Html,
    /// Page content as JSON
    Json,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(DashboardError::UnknownFormat(other.to_string())),
        }
    }
}

/// Turns a [`Document`] into text in one output format
pub trait Renderer: Send + Sync {
    fn format(&self) -> OutputFormat;
    fn render(&self, document: &Document) -> Result<String>;
}

pub struct RendererFactory;

impl RendererFactory {
    pub fn create(format: OutputFormat) -> Box<dyn Renderer> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalRenderer::default()),
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

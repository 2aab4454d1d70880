//! Dashboard engine: load, build, render

use crate::error::Result;
use crate::page::{Document, Page};
use crate::render::{OutputFormat, RendererFactory};
use crate::section::Section;
use crate::sections::build_page;
use std::path::{Path, PathBuf};
use tracing::info;
use trustreg_core::DecisionTable;
use trustreg_utils::DashboardConfig;

/// Renders dashboard sections from the configured decision data
///
/// The CSV is read fresh for every render and dropped afterwards.
pub struct Dashboard {
    config: DashboardConfig,
    data_path: PathBuf,
}

impl Dashboard {
    /// Create a dashboard, resolving the data path against `cwd`
    pub fn new(config: DashboardConfig, cwd: &Path) -> Self {
        let data_path = config.resolve_data_path(cwd);
        Self { config, data_path }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Read the decision table
    pub fn load(&self) -> Result<DecisionTable> {
        Ok(DecisionTable::from_path(&self.data_path)?)
    }

    /// Build a single page
    pub fn page(&self, section: Section) -> Result<Page> {
        let table = if section.requires_data() {
            Some(self.load()?)
        } else {
            None
        };
        build_page(section, table.as_ref(), &self.config)
    }

    /// Build a document holding `sections` in the given order
    ///
    /// The table is loaded once, and only if some section needs it.
    pub fn document(&self, sections: &[Section]) -> Result<Document> {
        let table = if sections.iter().any(|s| s.requires_data()) {
            Some(self.load()?)
        } else {
            None
        };

        let pages = sections
            .iter()
            .map(|&section| build_page(section, table.as_ref(), &self.config))
            .collect::<Result<Vec<_>>>()?;

        let mut document = Document::new(&self.config.title, pages);
        if table.is_some() {
            document = document.with_data_source(self.data_path.display().to_string());
        }
        Ok(document)
    }

    /// Build and render `sections`
    pub fn render(&self, sections: &[Section], format: OutputFormat) -> Result<String> {
        let document = self.document(sections)?;
        let output = RendererFactory::create(format).render(&document)?;
        info!(
            sections = sections.len(),
            %format,
            bytes = output.len(),
            "Rendered dashboard"
        );
        Ok(output)
    }
}

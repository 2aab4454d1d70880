use super::{OutputFormat, Renderer};
use crate::error::Result;
use crate::page::Document;

/// Pretty-printed JSON of the whole document
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, document: &Document) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}

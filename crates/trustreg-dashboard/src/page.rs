//! Format-independent page content

use crate::chart::Chart;
use crate::section::Section;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A simple table with string cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub caption: Option<String>,
}

impl TableBlock {
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            caption: None,
        }
    }

    pub fn with_row<C: Into<String>>(mut self, row: impl IntoIterator<Item = C>) -> Self {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Header { text: String },
    Subheader { text: String },
    Text { text: String },
    Metric { label: String, value: String },
    List { title: String, items: Vec<String> },
    Table(TableBlock),
    Chart { chart: Chart },
    /// Side-by-side groups; nested `Columns` are not rendered
    Columns { columns: Vec<Vec<Block>> },
    Divider,
}

impl Block {
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header { text: text.into() }
    }

    pub fn subheader(text: impl Into<String>) -> Self {
        Block::Subheader { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }

    pub fn metric(label: impl Into<String>, value: impl ToString) -> Self {
        Block::Metric {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn chart(chart: impl Into<Chart>) -> Self {
        Block::Chart {
            chart: chart.into(),
        }
    }
}

/// One rendered dashboard section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub section: Section,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            title: section.label().to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// All blocks including those nested in columns, in reading order
    pub fn flatten(&self) -> Vec<&Block> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Columns { columns } => out.extend(columns.iter().flatten()),
                other => out.push(other),
            }
        }
        out
    }

    /// Metric value by label
    pub fn metric(&self, label: &str) -> Option<&str> {
        self.flatten().into_iter().find_map(|block| match block {
            Block::Metric { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn charts(&self) -> Vec<&Chart> {
        self.flatten()
            .into_iter()
            .filter_map(|block| match block {
                Block::Chart { chart } => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<&TableBlock> {
        self.flatten()
            .into_iter()
            .filter_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }
}

/// A rendered set of pages sharing one page header
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub data_source: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(title: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            title: title.into(),
            heading: "TrustReg: Legal LLM Governance Framework".to_string(),
            intro: "TrustReg is a multi-phase governance framework for legal LLM outputs. \
                    This dashboard shows how governance failed, evolved, and improved \
                    through domain-aware harm modeling and policy learning."
                .to_string(),
            data_source: None,
            generated_at: Utc::now(),
            pages,
        }
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = Some(source.into());
        self
    }
}

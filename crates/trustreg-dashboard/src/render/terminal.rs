//! Plain-text rendering for terminals

use super::{OutputFormat, Renderer};
use crate::chart::{BarChart, Chart, ScatterChart, format_value};
use crate::error::Result;
use crate::page::{Block, Document, TableBlock};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

/// Renders tables with `comfy-table` and charts as text plots
pub struct TerminalRenderer {
    /// Width of the longest bar, in characters
    pub bar_width: usize,
    /// Scatter grid size in characters
    pub plot_width: usize,
    pub plot_height: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            bar_width: 40,
            plot_width: 48,
            plot_height: 12,
        }
    }
}

impl Renderer for TerminalRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Terminal
    }

    fn render(&self, document: &Document) -> Result<String> {
        let mut out = String::new();
        let rule = "═".repeat(document.title.chars().count().max(40));
        out.push_str(&format!("{rule}\n{}\n{rule}\n", document.title));
        out.push_str(&format!("{}\n{}\n", document.heading, document.intro));
        if let Some(source) = &document.data_source {
            out.push_str(&format!("Data: {source}\n"));
        }

        for page in &document.pages {
            for block in &page.blocks {
                self.render_block(&mut out, block);
            }
        }

        out.push_str(&format!(
            "\nGenerated {}\n",
            document.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        Ok(out)
    }
}

impl TerminalRenderer {
    fn render_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Header { text } => {
                out.push_str(&format!("\n{text}\n{}\n", "=".repeat(text.chars().count())));
            }
            Block::Subheader { text } => {
                out.push_str(&format!("\n{text}\n{}\n", "-".repeat(text.chars().count())));
            }
            Block::Text { text } => out.push_str(&format!("{text}\n")),
            Block::Metric { label, value } => out.push_str(&format!("▸ {label}: {value}\n")),
            Block::List { title, items } => {
                out.push_str(&format!("{title}: {}\n", items.join(", ")));
            }
            Block::Table(table) => out.push_str(&render_table(table)),
            Block::Chart { chart } => match chart {
                Chart::Bar(chart) => out.push_str(&self.render_bars(chart)),
                Chart::Scatter(chart) => out.push_str(&self.render_scatter(chart)),
            },
            Block::Columns { columns } => {
                for block in columns.iter().flatten() {
                    // Nested columns are flattened by the page model
                    if !matches!(block, Block::Columns { .. }) {
                        self.render_block(out, block);
                    }
                }
            }
            Block::Divider => out.push_str(&format!("{}\n", "─".repeat(60))),
        }
    }

    /// Horizontal bars scaled to the largest value
    pub fn render_bars(&self, chart: &BarChart) -> String {
        let mut out = format!("\n{}\n", chart.title);
        let label_width = chart
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        let max = chart.max_value();

        for bar in &chart.bars {
            let len = if max > 0.0 {
                (bar.value.max(0.0) / max * self.bar_width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "  {label:<label_width$} │{bar} {value}\n",
                label = bar.label,
                bar = "█".repeat(len),
                value = format_value(bar.value),
            ));
        }
        out.push_str(&axis_note(chart.x_label.as_deref(), chart.y_label.as_deref()));
        out
    }

    /// Character grid plot followed by a point legend
    pub fn render_scatter(&self, chart: &ScatterChart) -> String {
        let mut out = format!("\n{}\n", chart.title);
        let ((x_min, x_max), (y_min, y_max)) = chart.bounds();
        let (width, height) = (self.plot_width.max(2), self.plot_height.max(2));

        let mut grid = vec![vec![' '; width]; height];
        for point in &chart.points {
            let col = ((point.x - x_min) / (x_max - x_min) * (width - 1) as f64).round() as usize;
            let row = ((y_max - point.y) / (y_max - y_min) * (height - 1) as f64).round() as usize;
            grid[row.min(height - 1)][col.min(width - 1)] = '●';
        }

        let top = format_value(y_max);
        let bottom = format_value(y_min);
        let gutter = top.chars().count().max(bottom.chars().count());
        for (i, row) in grid.iter().enumerate() {
            let tick = match i {
                0 => top.as_str(),
                i if i == height - 1 => bottom.as_str(),
                _ => "",
            };
            let line: String = row.iter().collect();
            out.push_str(&format!("  {tick:>gutter$} │{}\n", line.trim_end()));
        }
        out.push_str(&format!("  {:>gutter$} └{}\n", "", "─".repeat(width)));
        let left = format_value(x_min);
        let right = format_value(x_max);
        let pad = width.saturating_sub(left.chars().count());
        out.push_str(&format!("  {:>gutter$}  {left}{right:>pad$}\n", ""));

        for point in &chart.points {
            let mut line = format!(
                "  ● ({}, {})",
                format_value(point.x),
                format_value(point.y)
            );
            if let Some(label) = &point.label {
                line.push_str(&format!(" {label}"));
            }
            if point.count > 1 {
                line.push_str(&format!(" ×{}", point.count));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&axis_note(chart.x_label.as_deref(), chart.y_label.as_deref()));
        out
    }
}

fn axis_note(x_label: Option<&str>, y_label: Option<&str>) -> String {
    match (x_label, y_label) {
        (Some(x), Some(y)) => format!("  (x: {x}, y: {y})\n"),
        (Some(x), None) => format!("  (x: {x})\n"),
        (None, Some(y)) => format!("  (y: {y})\n"),
        (None, None) => String::new(),
    }
}

fn render_table(block: &TableBlock) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(block.headers.clone());
    for row in &block.rows {
        table.add_row(row.clone());
    }

    let mut out = format!("{table}\n");
    if let Some(caption) = &block.caption {
        out.push_str(&format!("{caption}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::section::Section;

    #[test]
    fn test_bars_scale_to_max() {
        let renderer = TerminalRenderer {
            bar_width: 10,
            ..Default::default()
        };
        let chart = BarChart::new("Outcomes")
            .bar("Harm", 10.0)
            .bar("Utility", 5.0)
            .y_label("Total");
        let out = renderer.render_bars(&chart);

        assert!(out.contains(&format!("Harm    │{} 10", "█".repeat(10))));
        assert!(out.contains(&format!("Utility │{} 5", "█".repeat(5))));
        assert!(out.contains("(y: Total)"));
    }

    #[test]
    fn test_zero_bars() {
        let out = TerminalRenderer::default().render_bars(&BarChart::new("Zero").bar("Harm", 0.0));
        assert!(out.contains("Harm │ 0"));
    }

    #[test]
    fn test_scatter_legend() {
        let chart = ScatterChart::new("Frontier")
            .point(6.0, 2.0, Some("Linear".to_string()))
            .weighted_point(0.0, 1.0, 4)
            .x_label("Harm")
            .y_label("Utility");
        let out = TerminalRenderer::default().render_scatter(&chart);

        assert_eq!(out.matches('●').count(), 4);
        assert!(out.contains("● (6, 2) Linear"));
        assert!(out.contains("● (0, 1) ×4"));
        assert!(out.contains("(x: Harm, y: Utility)"));
    }

    #[test]
    fn test_document_layout() {
        let mut page = Page::new(Section::ModelComparison);
        page.push(Block::header("Governance Model Comparison"))
            .push(Block::Table(
                TableBlock::new(["Model", "Harm"])
                    .with_row(["XGBoost", "684"])
                    .with_caption("Test set"),
            ))
            .push(Block::metric("Total Samples", 5));
        let document = Document::new("TrustReg Governance Dashboard", vec![page])
            .with_data_source("outputs/trustreg_model_comparison.csv");

        let out = TerminalRenderer::default().render(&document).unwrap();
        assert!(out.contains("TrustReg: Legal LLM Governance Framework"));
        assert!(out.contains("Data: outputs/trustreg_model_comparison.csv"));
        assert!(out.contains("Governance Model Comparison\n==="));
        assert!(out.contains("XGBoost"));
        assert!(out.contains("Test set"));
        assert!(out.contains("▸ Total Samples: 5"));
    }
}

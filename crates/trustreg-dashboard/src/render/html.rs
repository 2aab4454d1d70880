//! Self-contained HTML output
//!
//! Pages are laid out by a MiniJinja template with a sidebar linking every
//! rendered section. Charts are embedded as inline SVG; all other text goes
//! through the template's HTML auto-escaping.

use super::{OutputFormat, Renderer};
use crate::chart::Chart;
use crate::error::Result;
use crate::page::{Block, Document, Page, TableBlock};
use minijinja::{Environment, context};
use serde::Serialize;
use tracing::debug;

const TEMPLATE_NAME: &str = "dashboard.html";

const TEMPLATE: &str = r##"<!DOCTYPE html>
{%- macro render_block(block) -%}
{%- if block.kind == "header" %}<h2>{{ block.text }}</h2>
{%- elif block.kind == "subheader" %}<h3>{{ block.text }}</h3>
{%- elif block.kind == "text" %}<p>{{ block.text }}</p>
{%- elif block.kind == "metric" %}<div class="metric"><span class="metric-label">{{ block.label }}</span><span class="metric-value">{{ block.value }}</span></div>
{%- elif block.kind == "list" %}<p><strong>{{ block.title }}:</strong> {{ block.items|join(", ") }}</p>
{%- elif block.kind == "table" %}
<div class="table-wrap"><table>
{%- if block.table.caption %}<caption>{{ block.table.caption }}</caption>{% endif %}
<thead><tr>{% for header in block.table.headers %}<th>{{ header }}</th>{% endfor %}</tr></thead>
<tbody>
{%- for row in block.table.rows %}
<tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{%- endfor %}
</tbody></table></div>
{%- elif block.kind == "chart" %}<figure class="chart">{{ block.svg|safe }}<figcaption>{{ block.title }}</figcaption></figure>
{%- elif block.kind == "divider" %}<hr>
{%- endif %}
{%- endmacro %}
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{ title }}</title>
<style>
body { margin: 0; font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; color: #222; display: flex; }
nav { width: 220px; min-height: 100vh; background: #f3f4f6; padding: 1.5rem 1rem; box-sizing: border-box; position: sticky; top: 0; align-self: flex-start; }
nav h2 { font-size: 1rem; margin-top: 0; }
nav a { display: block; padding: 0.35rem 0; color: #1f4e8c; text-decoration: none; }
main { flex: 1; padding: 1.5rem 2.5rem; max-width: 1100px; }
section { margin-bottom: 3rem; }
.columns { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.columns > div { flex: 1; min-width: 320px; }
.metric { display: inline-block; margin: 0.5rem 2rem 0.5rem 0; }
.metric-label { display: block; font-size: 0.85rem; color: #555; }
.metric-value { display: block; font-size: 1.8rem; }
.table-wrap { overflow-x: auto; }
table { border-collapse: collapse; margin: 0.75rem 0; font-size: 0.9rem; }
caption { caption-side: bottom; text-align: left; color: #666; font-size: 0.8rem; padding-top: 0.3rem; }
th, td { border: 1px solid #ddd; padding: 0.3rem 0.6rem; text-align: left; }
th { background: #f9fafb; }
figure.chart { margin: 1rem 0; }
footer { color: #777; font-size: 0.8rem; }
</style>
</head>
<body>
<nav>
<h2>Navigate</h2>
{%- for page in pages %}
<a href="#{{ page.slug }}">{{ page.title }}</a>
{%- endfor %}
</nav>
<main>
<h1>{{ heading }}</h1>
<p>{{ intro }}</p>
{%- if data_source %}
<p class="source">Data: <code>{{ data_source }}</code></p>
{%- endif %}
{%- for page in pages %}
<section id="{{ page.slug }}">
{%- for block in page.blocks %}
{%- if block.kind == "columns" %}
<div class="columns">
{%- for column in block.columns %}
<div>{% for inner in column %}{{ render_block(inner) }}{% endfor %}</div>
{%- endfor %}
</div>
{%- else %}
{{ render_block(block) }}
{%- endif %}
{%- endfor %}
</section>
{%- endfor %}
<footer>Generated {{ generated_at }}</footer>
</main>
</body>
</html>
"##;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BlockView<'a> {
    Header { text: &'a str },
    Subheader { text: &'a str },
    Text { text: &'a str },
    Metric { label: &'a str, value: &'a str },
    List { title: &'a str, items: &'a [String] },
    Table { table: &'a TableBlock },
    Chart { title: &'a str, svg: String },
    Columns { columns: Vec<Vec<BlockView<'a>>> },
    Divider,
}

impl<'a> BlockView<'a> {
    fn from_block(block: &'a Block) -> Self {
        match block {
            Block::Header { text } => BlockView::Header { text },
            Block::Subheader { text } => BlockView::Subheader { text },
            Block::Text { text } => BlockView::Text { text },
            Block::Metric { label, value } => BlockView::Metric { label, value },
            Block::List { title, items } => BlockView::List { title, items },
            Block::Table(table) => BlockView::Table { table },
            Block::Chart { chart } => Self::chart(chart),
            Block::Columns { columns } => BlockView::Columns {
                columns: columns
                    .iter()
                    .map(|column| column.iter().map(Self::from_block).collect())
                    .collect(),
            },
            Block::Divider => BlockView::Divider,
        }
    }

    fn chart(chart: &'a Chart) -> Self {
        BlockView::Chart {
            title: chart.title(),
            svg: chart.to_svg(),
        }
    }
}

#[derive(Serialize)]
struct PageView<'a> {
    slug: &'static str,
    title: &'a str,
    blocks: Vec<BlockView<'a>>,
}

impl<'a> PageView<'a> {
    fn from_page(page: &'a Page) -> Self {
        Self {
            slug: page.section.slug(),
            title: &page.title,
            blocks: page.blocks.iter().map(BlockView::from_block).collect(),
        }
    }
}

/// Single-file HTML dashboard
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, document: &Document) -> Result<String> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;

        let pages: Vec<PageView<'_>> = document.pages.iter().map(PageView::from_page).collect();
        debug!(pages = pages.len(), "Rendering HTML dashboard");

        let html = env.get_template(TEMPLATE_NAME)?.render(context! {
            title => &document.title,
            heading => &document.heading,
            intro => &document.intro,
            data_source => &document.data_source,
            generated_at => document.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            pages => pages,
        })?;
        Ok(html)
    }
}

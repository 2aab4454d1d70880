//! Chart model and SVG rendering
//!
//! Charts carry their data and labels only; [`Chart::to_svg`] lays them out
//! into a standalone SVG document for the HTML renderer.

use serde::Serialize;
use std::fmt::Write;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 56.0;
const TICKS: usize = 4;
const BAR_FILL: &str = "#1f77b4";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            bars: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn bar(mut self, label: impl Into<String>, value: f64) -> Self {
        self.bars.push(Bar {
            label: label.into(),
            value,
        });
        self
    }

    /// Largest bar value, never below zero
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
    /// Number of observations sharing this position
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            points: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn point(mut self, x: f64, y: f64, label: Option<String>) -> Self {
        self.points.push(ScatterPoint {
            x,
            y,
            label,
            count: 1,
        });
        self
    }

    /// Add a point standing for `count` coincident observations
    pub fn weighted_point(mut self, x: f64, y: f64, count: usize) -> Self {
        self.points.push(ScatterPoint {
            x,
            y,
            label: None,
            count,
        });
        self
    }

    /// `(min, max)` over x and y, padded so a single point still has extent
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let axis = |values: Vec<f64>| {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if !min.is_finite() || !max.is_finite() {
                return (0.0, 1.0);
            }
            let pad = ((max - min) * 0.1).max(1.0);
            (min - pad, max + pad)
        };
        (
            axis(self.points.iter().map(|p| p.x).collect()),
            axis(self.points.iter().map(|p| p.y).collect()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    Scatter(ScatterChart),
}

impl From<BarChart> for Chart {
    fn from(chart: BarChart) -> Self {
        Chart::Bar(chart)
    }
}

impl From<ScatterChart> for Chart {
    fn from(chart: ScatterChart) -> Self {
        Chart::Scatter(chart)
    }
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::Scatter(c) => &c.title,
        }
    }

    /// Render as a standalone SVG element
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="{title}">"#,
            title = escape_xml(self.title()),
        );
        let _ = write!(
            svg,
            r#"<text x="{x}" y="24" text-anchor="middle" font-size="15" font-weight="bold">{title}</text>"#,
            x = WIDTH / 2.0,
            title = escape_xml(self.title()),
        );

        match self {
            Chart::Bar(chart) => {
                write_axes(&mut svg, chart.x_label.as_deref(), chart.y_label.as_deref());
                write_bars(&mut svg, chart);
            }
            Chart::Scatter(chart) => {
                write_axes(&mut svg, chart.x_label.as_deref(), chart.y_label.as_deref());
                write_scatter(&mut svg, chart);
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn write_axes(svg: &mut String, x_label: Option<&str>, y_label: Option<&str>) {
    let bottom = HEIGHT - MARGIN_BOTTOM;
    let right = WIDTH - MARGIN_RIGHT;
    let _ = write!(
        svg,
        r##"<line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#333"/><line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{bottom}" stroke="#333"/>"##,
    );
    if let Some(label) = x_label {
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" text-anchor="middle" font-size="12">{label}</text>"#,
            x = MARGIN_LEFT + plot_width() / 2.0,
            y = HEIGHT - 12.0,
            label = escape_xml(label),
        );
    }
    if let Some(label) = y_label {
        let y = MARGIN_TOP + plot_height() / 2.0;
        let _ = write!(
            svg,
            r#"<text x="16" y="{y}" text-anchor="middle" font-size="12" transform="rotate(-90 16 {y})">{label}</text>"#,
            label = escape_xml(label),
        );
    }
}

fn write_y_ticks(svg: &mut String, min: f64, max: f64) {
    for i in 0..=TICKS {
        let value = min + (max - min) * i as f64 / TICKS as f64;
        let y = HEIGHT - MARGIN_BOTTOM - plot_height() * i as f64 / TICKS as f64;
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{ty}" text-anchor="end" font-size="10">{value}</text>"#,
            x = MARGIN_LEFT - 6.0,
            ty = y + 3.0,
            value = format_value(value),
        );
    }
}

fn write_bars(svg: &mut String, chart: &BarChart) {
    let max = match chart.max_value() {
        m if m > 0.0 => m,
        _ => 1.0,
    };
    write_y_ticks(svg, 0.0, max);

    if chart.bars.is_empty() {
        return;
    }
    let slot = plot_width() / chart.bars.len() as f64;
    let bar_width = slot * 0.7;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    for (i, bar) in chart.bars.iter().enumerate() {
        let height = plot_height() * bar.value.max(0.0) / max;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{BAR_FILL}"><title>{label}: {value}</title></rect>"#,
            y = bottom - height,
            label = escape_xml(&bar.label),
            value = format_value(bar.value),
        );
        let _ = write!(
            svg,
            r#"<text x="{cx:.1}" y="{ty}" text-anchor="middle" font-size="11">{label}</text>"#,
            cx = x + bar_width / 2.0,
            ty = bottom + 16.0,
            label = escape_xml(&bar.label),
        );
    }
}

fn write_scatter(svg: &mut String, chart: &ScatterChart) {
    let ((x_min, x_max), (y_min, y_max)) = chart.bounds();
    write_y_ticks(svg, y_min, y_max);

    let bottom = HEIGHT - MARGIN_BOTTOM;
    for i in 0..=TICKS {
        let value = x_min + (x_max - x_min) * i as f64 / TICKS as f64;
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{y}" text-anchor="middle" font-size="10">{value}</text>"#,
            x = MARGIN_LEFT + plot_width() * i as f64 / TICKS as f64,
            y = bottom + 16.0,
            value = format_value(value),
        );
    }

    for point in &chart.points {
        let cx = MARGIN_LEFT + plot_width() * (point.x - x_min) / (x_max - x_min);
        let cy = bottom - plot_height() * (point.y - y_min) / (y_max - y_min);
        let radius = (3.0 + (point.count as f64).sqrt()).min(14.0);
        let _ = write!(
            svg,
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{radius:.1}" fill="{BAR_FILL}" fill-opacity="0.7"><title>({x}, {y}) n={count}</title></circle>"#,
            x = format_value(point.x),
            y = format_value(point.y),
            count = point.count,
        );
        if let Some(label) = &point.label {
            let _ = write!(
                svg,
                r#"<text x="{tx:.1}" y="{ty:.1}" font-size="11">{label}</text>"#,
                tx = cx + 6.0,
                ty = cy - 6.0,
                label = escape_xml(label),
            );
        }
    }
}

/// Whole numbers without decimals, everything else to two places
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

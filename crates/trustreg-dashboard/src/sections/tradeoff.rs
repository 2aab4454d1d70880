//! Harm/utility tradeoff of the primary model

use crate::chart::{BarChart, ScatterChart};
use crate::error::Result;
use crate::page::{Block, Page};
use crate::section::Section;
use std::collections::BTreeMap;
use trustreg_core::{DecisionTable, compute_metrics, row_scores};
use trustreg_utils::DashboardConfig;

pub fn build(table: &DecisionTable, config: &DashboardConfig) -> Result<Page> {
    let column = &config.primary_column;
    let name = DashboardConfig::display_name(column);
    let metrics = compute_metrics(table, column)?;

    let outcomes = BarChart::new(format!("{name} Outcomes"))
        .bar("Harm", metrics.harm as f64)
        .bar("Utility", metrics.utility as f64);

    let mut page = Page::new(Section::HarmVsUtility);
    page.push(Block::header(format!("{name} Governance Tradeoff")))
        .push(Block::Columns {
            columns: vec![
                vec![Block::chart(outcomes)],
                vec![Block::chart(score_scatter(table, column)?)],
            ],
        });
    Ok(page)
}

/// Per-row (harm, utility) scatter; identical scores collapse into one weighted point
pub fn score_scatter(table: &DecisionTable, column: &str) -> Result<ScatterChart> {
    let mut counts = BTreeMap::new();
    for score in row_scores(table, column)? {
        *counts.entry(score).or_insert(0usize) += 1;
    }

    Ok(counts.into_iter().fold(
        ScatterChart::new("Harm vs Utility Scatter")
            .x_label("Harm")
            .y_label("Utility"),
        |chart, (score, count)| {
            chart.weighted_point(f64::from(score.harm), f64::from(score.utility), count)
        },
    ))
}

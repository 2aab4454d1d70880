//! Project overview

use crate::error::Result;
use crate::page::{Block, Page, TableBlock};
use crate::section::Section;
use trustreg_core::{DecisionTable, compute_metrics};
use trustreg_utils::DashboardConfig;

const PHASES: [(&str, &str); 4] = [
    ("v1 Hallucination Governance", "Failed"),
    ("v2 Harm Minimization", "Collapsed into blocking"),
    ("v3 Domain-Aware Governance", "Reduced harm + preserved utility"),
    ("v3 + RF/XGB", "Tunable harm–utility frontier"),
];

pub fn build(table: &DecisionTable, config: &DashboardConfig) -> Result<Page> {
    let metrics = compute_metrics(table, &config.primary_column)?;
    let name = DashboardConfig::display_name(&config.primary_column);

    let mut phases = TableBlock::new(["Phase", "Result"]);
    for (phase, result) in PHASES {
        phases = phases.with_row([phase, result]);
    }

    let mut page = Page::new(Section::Overview);
    page.push(Block::header("Project Overview"))
        .push(Block::text(
            "Problem: hallucination detection alone cannot ensure safe legal AI decisions.",
        ))
        .push(Block::subheader("TrustReg Evolution"))
        .push(Block::Table(phases))
        .push(Block::metric("Total Samples", table.len()))
        .push(Block::metric(format!("{name} Harm"), metrics.harm))
        .push(Block::metric(format!("{name} Utility"), metrics.utility));
    Ok(page)
}

//! Page builders, one per dashboard section

mod comparison;
mod decisions;
mod overview;
mod raw_data;
mod story;
mod tradeoff;

use crate::error::{DashboardError, Result};
use crate::page::Page;
use crate::section::Section;
use trustreg_core::DecisionTable;
use trustreg_utils::DashboardConfig;

pub use comparison::reference_commentary;
pub use tradeoff::score_scatter;

/// Build the page for `section`
///
/// `table` may be `None` only for sections that do not read data.
pub fn build_page(
    section: Section,
    table: Option<&DecisionTable>,
    config: &DashboardConfig,
) -> Result<Page> {
    match (section, table) {
        (Section::EvolutionStory, _) => Ok(story::build()),
        (_, None) => Err(DashboardError::DataRequired(section)),
        (Section::Overview, Some(table)) => overview::build(table, config),
        (Section::RawData, Some(table)) => Ok(raw_data::build(table, config)),
        (Section::GovernanceDecisions, Some(table)) => decisions::build(table, config),
        (Section::HarmVsUtility, Some(table)) => tradeoff::build(table, config),
        (Section::ModelComparison, Some(table)) => comparison::build(table, config),
    }
}

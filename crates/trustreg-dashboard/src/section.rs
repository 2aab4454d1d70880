//! Dashboard sections in menu order

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Overview,
    RawData,
    GovernanceDecisions,
    HarmVsUtility,
    ModelComparison,
    EvolutionStory,
}

impl Section {
    /// Every section, in navigation order
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::RawData,
        Section::GovernanceDecisions,
        Section::HarmVsUtility,
        Section::ModelComparison,
        Section::EvolutionStory,
    ];

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::RawData => "Raw Data",
            Section::GovernanceDecisions => "Governance Decisions",
            Section::HarmVsUtility => "Harm vs Utility",
            Section::ModelComparison => "Model Comparison",
            Section::EvolutionStory => "TrustReg Evolution Story",
        }
    }

    /// Identifier used on the command line and as an HTML anchor
    pub fn slug(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::RawData => "raw-data",
            Section::GovernanceDecisions => "governance-decisions",
            Section::HarmVsUtility => "harm-vs-utility",
            Section::ModelComparison => "model-comparison",
            Section::EvolutionStory => "evolution-story",
        }
    }

    /// Whether building this section reads the decision table
    pub fn requires_data(self) -> bool {
        !matches!(self, Section::EvolutionStory)
    }

    /// 1-based position in the menu
    pub fn from_menu_index(index: usize) -> Option<Section> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    /// Accepts the slug or the menu label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| {
                section.slug().eq_ignore_ascii_case(wanted)
                    || section.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DashboardError::UnknownSection(wanted.to_string()))
    }
}

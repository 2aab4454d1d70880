//! The phase-by-phase narrative; static content

use crate::page::{Block, Page};
use crate::section::Section;

const PHASES: [(&str, &[&str]); 5] = [
    (
        "Phase 1 — Hallucination Governance",
        &["Failed to reduce harm."],
    ),
    ("Phase 2 — Harm Minimization", &["Blocked everything."]),
    (
        "Phase 3 — Utility-Aware Governance",
        &["Stable but misaligned."],
    ),
    (
        "Phase 4 — Domain-Aware Governance",
        &["Reduced harm and preserved utility."],
    ),
    (
        "Phase 5 — Policy Learning",
        &["RF minimized harm.", "XGB maximized utility."],
    ),
];

pub fn build() -> Page {
    let mut page = Page::new(Section::EvolutionStory);
    page.push(Block::header("TrustReg Evolution Story"));
    for (phase, lines) in PHASES {
        page.push(Block::subheader(phase));
        for line in lines {
            page.push(Block::text(*line));
        }
    }
    page.push(Block::Divider);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_phases() {
        let page = build();
        let phases: Vec<&str> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Subheader { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(phases.len(), 5);
        assert!(phases[4].starts_with("Phase 5"));
        assert_eq!(page.blocks.last(), Some(&Block::Divider));
    }
}

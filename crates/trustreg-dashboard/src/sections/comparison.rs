//! Side-by-side comparison of all configured model variants

use crate::chart::{BarChart, ScatterChart, format_value};
use crate::error::Result;
use crate::page::{Block, Page, TableBlock};
use crate::section::Section;
use trustreg_core::{DecisionMetrics, DecisionTable, compute_metrics};
use trustreg_utils::{DashboardConfig, ModelVariant, ReferenceResult};

pub fn build(table: &DecisionTable, config: &DashboardConfig) -> Result<Page> {
    let mut scored: Vec<(&ModelVariant, DecisionMetrics)> = Vec::with_capacity(config.models.len());
    for model in &config.models {
        scored.push((model, compute_metrics(table, &model.column)?));
    }

    let mut page = Page::new(Section::ModelComparison);
    page.push(Block::header("Governance Model Comparison"));

    if !config.reference_results.is_empty() {
        let reported = config
            .reference_results
            .iter()
            .fold(TableBlock::new(["Model", "Harm", "Utility"]), |t, r| {
                t.with_row([r.model.clone(), r.harm.to_string(), r.utility.to_string()])
            });
        page.push(Block::subheader("Final Governance Comparison (Test Set)"))
            .push(Block::Table(reported));
        for line in reference_commentary(&config.reference_results) {
            page.push(Block::text(line));
        }
    }

    let computed = scored.iter().fold(
        TableBlock::new(["Model", "Column", "Harm", "Utility", "Approval Rate"])
            .with_caption(format!("{} rows", table.len())),
        |t, (model, m)| {
            t.with_row([
                model.label.clone(),
                model.column.clone(),
                m.harm.to_string(),
                m.utility.to_string(),
                format!("{}%", format_value(m.approval_percent())),
            ])
        },
    );
    page.push(Block::subheader("Loaded Dataset"))
        .push(Block::Table(computed));

    let mut harm = BarChart::new("Decision Harm by Model").y_label("Total Harm");
    let mut utility = BarChart::new("Decision Utility by Model").y_label("Total Utility");
    let mut frontier = ScatterChart::new("Governance Harm–Utility Frontier")
        .x_label("Harm")
        .y_label("Utility");
    for (model, m) in &scored {
        harm = harm.bar(model.short_label.clone(), m.harm as f64);
        utility = utility.bar(model.short_label.clone(), m.utility as f64);
        frontier = frontier.point(
            m.harm as f64,
            m.utility as f64,
            Some(model.short_label.clone()),
        );
    }

    page.push(Block::Columns {
        columns: vec![vec![Block::chart(harm)], vec![Block::chart(utility)]],
    })
    .push(Block::chart(frontier));
    Ok(page)
}

/// One line per notable model: lowest harm, highest utility, then the rest
pub fn reference_commentary(results: &[ReferenceResult]) -> Vec<String> {
    let Some(safest) = results.iter().min_by_key(|r| r.harm) else {
        return Vec::new();
    };
    let Some(richest) = results.iter().max_by_key(|r| r.utility) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if safest.model == richest.model {
        lines.push(format!(
            "{} minimizes harm and preserves the most utility.",
            safest.model
        ));
    } else {
        lines.push(format!("{} minimizes harm.", safest.model));
        lines.push(format!("{} preserves the most utility.", richest.model));
    }
    for result in results {
        if result.model != safest.model && result.model != richest.model {
            lines.push(format!("{} provides a balanced baseline.", result.model));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::sections::fixtures::sample;

    #[test]
    fn test_reference_commentary_defaults() {
        let lines = reference_commentary(&DashboardConfig::default().reference_results);
        assert_eq!(
            lines,
            vec![
                "Random Forest minimizes harm.",
                "XGBoost preserves the most utility.",
                "Linear Regression provides a balanced baseline.",
            ]
        );
    }

    #[test]
    fn test_reference_commentary_single_winner() {
        let results = vec![
            ReferenceResult::new("A", 10, 50),
            ReferenceResult::new("B", 20, 40),
        ];
        assert_eq!(
            reference_commentary(&results),
            vec![
                "A minimizes harm and preserves the most utility.",
                "B provides a balanced baseline.",
            ]
        );
        assert!(reference_commentary(&[]).is_empty());
    }

    #[test]
    fn test_computed_metrics_per_model() {
        let page = build(&sample(), &DashboardConfig::default()).unwrap();
        let tables = page.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows[1], vec!["Random Forest", "676", "461"]);

        let computed = tables[1];
        assert_eq!(computed.rows[0], vec!["Linear Regression", "TrustReg_v3", "6", "2", "60%"]);
        assert_eq!(computed.rows[1], vec!["Random Forest", "TrustReg_rf", "3", "0", "0%"]);
        assert_eq!(computed.rows[2], vec!["XGBoost", "TrustReg_xgb", "5", "3", "80%"]);
    }

    #[test]
    fn test_charts() {
        let page = build(&sample(), &DashboardConfig::default()).unwrap();
        let charts = page.charts();
        assert_eq!(charts.len(), 3);

        let Chart::Bar(harm) = charts[0] else {
            panic!("Expected harm bar chart");
        };
        let labels: Vec<&str> = harm.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Linear", "Random Forest", "XGBoost"]);

        let Chart::Scatter(frontier) = charts[2] else {
            panic!("Expected frontier scatter");
        };
        assert_eq!(frontier.points[2].label.as_deref(), Some("XGBoost"));
        assert_eq!((frontier.points[2].x, frontier.points[2].y), (5.0, 3.0));
    }

    #[test]
    fn test_reference_table_optional() {
        let config = DashboardConfig::builder()
            .reference_results(vec![])
            .build()
            .unwrap();
        let page = build(&sample(), &config).unwrap();
        assert_eq!(page.tables().len(), 1);
    }

    #[test]
    fn test_missing_model_column() {
        let config = DashboardConfig::builder()
            .models(vec![ModelVariant::new("TrustReg_v4", "v4", "v4")])
            .build()
            .unwrap();
        assert!(build(&sample(), &config).is_err());
    }
}

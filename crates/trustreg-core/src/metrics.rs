//! Per-column harm/utility aggregation

use crate::dataset::DecisionTable;
use crate::error::Result;
use crate::scoring::{decision_harm, decision_utility};
use serde::Serialize;
use tracing::debug;

/// Harm and utility of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowScore {
    pub harm: u32,
    pub utility: u32,
}

/// Aggregate outcome of one decision column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionMetrics {
    pub column: String,
    pub samples: usize,
    pub harm: u64,
    pub utility: u64,
    pub approvals: usize,
}

impl DecisionMetrics {
    /// Share of approved rows as a percentage, `0.0` for an empty table
    pub fn approval_percent(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.approvals as f64 * 100.0 / self.samples as f64
    }
}

/// Counts of (predicted, actual) combinations for one decision column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Confusion {
    /// Approved, `binary_violation` = 1
    pub approved_positive: usize,
    /// Approved, `binary_violation` = 0
    pub approved_negative: usize,
    /// Not approved, `binary_violation` = 1
    pub withheld_positive: usize,
    /// Not approved, `binary_violation` = 0
    pub withheld_negative: usize,
}

/// Score every row of `decision_col` against the ground truth
pub fn row_scores(table: &DecisionTable, decision_col: &str) -> Result<Vec<RowScore>> {
    let predictions = table.predictions(decision_col)?;
    Ok(score_rows(&predictions, table.violations()).collect())
}

fn score_rows<'a>(predictions: &'a [u8], violations: &'a [u8]) -> impl Iterator<Item = RowScore> + 'a {
    predictions.iter().zip(violations).map(|(&p, &a)| RowScore {
        harm: decision_harm(p, a),
        utility: decision_utility(p, a),
    })
}

/// Total harm and utility for a decision column
pub fn compute_metrics(table: &DecisionTable, decision_col: &str) -> Result<DecisionMetrics> {
    let predictions = table.predictions(decision_col)?;

    let mut metrics = DecisionMetrics {
        column: decision_col.to_string(),
        samples: table.len(),
        harm: 0,
        utility: 0,
        approvals: predictions.iter().filter(|&&p| p == 1).count(),
    };
    for score in score_rows(&predictions, table.violations()) {
        metrics.harm += u64::from(score.harm);
        metrics.utility += u64::from(score.utility);
    }
    debug!(
        column = decision_col,
        harm = metrics.harm,
        utility = metrics.utility,
        "Computed decision metrics"
    );
    Ok(metrics)
}

/// Tabulate predictions against the ground truth
pub fn confusion(table: &DecisionTable, decision_col: &str) -> Result<Confusion> {
    let mut counts = Confusion::default();
    for (p, a) in table.predictions(decision_col)?.into_iter().zip(table.violations()) {
        match (p, a) {
            (1, 1) => counts.approved_positive += 1,
            (1, _) => counts.approved_negative += 1,
            (_, 1) => counts.withheld_positive += 1,
            _ => counts.withheld_negative += 1,
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // v3: (1,1) (1,0) (0,0) (0,1) (1,1)
    const SAMPLE: &str = "\
binary_violation,TrustReg_v3,TrustReg_rf
1,APPROVE,BLOCK
0,APPROVE,BLOCK
0,BLOCK,BLOCK
1,BLOCK,BLOCK
1,APPROVE,BLOCK
";

    fn sample() -> DecisionTable {
        DecisionTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_row_scores() {
        let scores = row_scores(&sample(), "TrustReg_v3").unwrap();
        let pairs: Vec<(u32, u32)> = scores.iter().map(|s| (s.harm, s.utility)).collect();
        assert_eq!(pairs, vec![(0, 1), (5, 0), (0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_compute_metrics_sums_rows() {
        let table = sample();
        let metrics = compute_metrics(&table, "TrustReg_v3").unwrap();
        assert_eq!(metrics.column, "TrustReg_v3");
        assert_eq!(metrics.samples, 5);
        assert_eq!(metrics.harm, 6);
        assert_eq!(metrics.utility, 2);
        assert_eq!(metrics.approvals, 3);

        let scores = row_scores(&table, "TrustReg_v3").unwrap();
        let harm: u64 = scores.iter().map(|s| u64::from(s.harm)).sum();
        assert_eq!(metrics.harm, harm);
    }

    #[test]
    fn test_compute_metrics_matches_row_scores_for_every_column() {
        let table = sample();
        for column in ["TrustReg_v3", "TrustReg_rf"] {
            let metrics = compute_metrics(&table, column).unwrap();
            let scores = row_scores(&table, column).unwrap();
            assert_eq!(scores.len(), metrics.samples);
            assert_eq!(metrics.harm, scores.iter().map(|s| u64::from(s.harm)).sum::<u64>());
            assert_eq!(metrics.utility, scores.iter().map(|s| u64::from(s.utility)).sum::<u64>());
            let approvals = table.predictions(column).unwrap().iter().filter(|&&p| p == 1).count();
            assert_eq!(metrics.approvals, approvals);
        }
    }

    #[test]
    fn test_block_everything() {
        let metrics = compute_metrics(&sample(), "TrustReg_rf").unwrap();
        // Only missed approvals: one point per violation row
        assert_eq!(metrics.harm, 3);
        assert_eq!(metrics.utility, 0);
        assert!(metrics.approval_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_approval_percent() {
        let metrics = compute_metrics(&sample(), "TrustReg_v3").unwrap();
        assert!((metrics.approval_percent() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_table() {
        let table = DecisionTable::from_reader("binary_violation,TrustReg_v3\n".as_bytes()).unwrap();
        let metrics = compute_metrics(&table, "TrustReg_v3").unwrap();
        assert_eq!(metrics.harm, 0);
        assert_eq!(metrics.utility, 0);
        assert!(metrics.approval_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_column() {
        let err = compute_metrics(&sample(), "TrustReg_xgb").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(_)));
    }

    #[test]
    fn test_confusion() {
        let counts = confusion(&sample(), "TrustReg_v3").unwrap();
        assert_eq!(
            counts,
            Confusion {
                approved_positive: 2,
                approved_negative: 1,
                withheld_positive: 1,
                withheld_negative: 1,
            }
        );
    }
}

//! Read-only decision table loaded from the model-comparison CSV

use crate::error::{Error, Result};
use crate::scoring::prediction_of;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Ground-truth column, `0` or `1` per row.
pub const VIOLATION_COLUMN: &str = "binary_violation";

/// Row-oriented table of model decisions
///
/// Cells are kept as the raw strings from the file. The `binary_violation`
/// column is parsed once at load time; decision columns are mapped to
/// predictions on demand.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    violations: Vec<u8>,
}

impl DecisionTable {
    /// Load a table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::DataNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "Loading decision table");
        let table = Self::from_reader(File::open(path)?)?;
        debug!(
            rows = table.len(),
            columns = table.headers.len(),
            "Decision table loaded"
        );
        Ok(table)
    }

    /// Load a table from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let violation_idx = headers
            .iter()
            .position(|h| h == VIOLATION_COLUMN)
            .ok_or_else(|| Error::MissingColumn(VIOLATION_COLUMN.to_string()))?;

        let mut rows = Vec::new();
        let mut violations = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let raw = record.get(violation_idx).unwrap_or_default();
            violations.push(parse_flag(raw).ok_or_else(|| Error::InvalidValue {
                column: VIOLATION_COLUMN.to_string(),
                row: i + 1,
                value: raw.to_string(),
            })?);
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            headers,
            rows,
            violations,
        })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Parsed ground-truth flags, one per row
    pub fn violations(&self) -> &[u8] {
        &self.violations
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// All values of a named column
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Binary predictions for a decision column (`1` for `APPROVE`)
    pub fn predictions(&self, decision_col: &str) -> Result<Vec<u8>> {
        Ok(self
            .column(decision_col)?
            .into_iter()
            .map(prediction_of)
            .collect())
    }

    /// The first `n` rows, or all of them when the table is shorter
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Distinct values of a column with their counts
    ///
    /// Sorted by count descending, ties broken by value.
    pub fn value_counts(&self, name: &str) -> Result<Vec<(String, usize)>> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in self.column(name)? {
            *counts.entry(value).or_default() += 1;
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(counts)
    }
}

/// Accepts `0`/`1`, `true`/`false` and the float spellings dataframe writers emit.
fn parse_flag(raw: &str) -> Option<u8> {
    match raw.trim() {
        "0" => Some(0),
        "1" => Some(1),
        other if other.eq_ignore_ascii_case("false") => Some(0),
        other if other.eq_ignore_ascii_case("true") => Some(1),
        other => match other.parse::<f64>().ok()? {
            v if v == 0.0 => Some(0),
            v if v == 1.0 => Some(1),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
id,binary_violation,TrustReg_v3,TrustReg_rf
a,1,APPROVE,BLOCK
b,0,APPROVE,APPROVE
c,0,BLOCK,BLOCK
d,1,BLOCK,APPROVE
e,1.0,APPROVE,APPROVE
";

    fn sample() -> DecisionTable {
        DecisionTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_from_reader() {
        let table = sample();
        assert_eq!(table.len(), 5);
        assert!(!table.is_empty());
        assert_eq!(
            table.headers(),
            &["id", "binary_violation", "TrustReg_v3", "TrustReg_rf"]
        );
        assert_eq!(table.violations(), &[1, 0, 0, 1, 1]);
    }

    #[test]
    fn test_predictions() {
        let table = sample();
        assert_eq!(table.predictions("TrustReg_v3").unwrap(), vec![1, 1, 0, 0, 1]);
        assert_eq!(table.predictions("TrustReg_rf").unwrap(), vec![0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_missing_decision_column() {
        let err = sample().predictions("TrustReg_xgb").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "TrustReg_xgb"));
    }

    #[test]
    fn test_missing_violation_column() {
        let err = DecisionTable::from_reader("id,TrustReg_v3\na,APPROVE\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == VIOLATION_COLUMN));
    }

    #[test]
    fn test_invalid_violation_value() {
        let data = "binary_violation,TrustReg_v3\n0,APPROVE\n2,BLOCK\n";
        let err = DecisionTable::from_reader(data.as_bytes()).unwrap_err();
        match err {
            Error::InvalidValue { column, row, value } => {
                assert_eq!(column, VIOLATION_COLUMN);
                assert_eq!(row, 2);
                assert_eq!(value, "2");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let data = "binary_violation,TrustReg_v3\n0,APPROVE,extra\n";
        let err = DecisionTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_header_only_is_empty() {
        let table = DecisionTable::from_reader("binary_violation,TrustReg_v3\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert!(table.value_counts("TrustReg_v3").unwrap().is_empty());
    }

    #[test]
    fn test_head() {
        let table = sample();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(2)[1][0], "b");
        assert_eq!(table.head(100).len(), 5);
        assert!(table.head(0).is_empty());
    }

    #[test]
    fn test_value_counts_ordering() {
        let counts = sample().value_counts("TrustReg_v3").unwrap();
        assert_eq!(
            counts,
            vec![("APPROVE".to_string(), 3), ("BLOCK".to_string(), 2)]
        );

        let counts = sample().value_counts("TrustReg_rf").unwrap();
        assert_eq!(
            counts,
            vec![("APPROVE".to_string(), 3), ("BLOCK".to_string(), 2)]
        );
    }

    #[test]
    fn test_value_counts_tie_broken_by_value() {
        let data = "binary_violation,d\n0,Z\n0,A\n";
        let table = DecisionTable::from_reader(data.as_bytes()).unwrap();
        let counts = table.value_counts("d").unwrap();
        assert_eq!(counts[0].0, "A");
        assert_eq!(counts[1].0, "Z");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("0"), Some(0));
        assert_eq!(parse_flag(" 1 "), Some(1));
        assert_eq!(parse_flag("0.0"), Some(0));
        assert_eq!(parse_flag("1.0"), Some(1));
        assert_eq!(parse_flag("0.5"), None);
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("yes"), None);
    }

    #[test]
    fn test_boolean_violation_flags() {
        let data = "binary_violation,TrustReg_v3\nTrue,APPROVE\nfalse,APPROVE\nTRUE,BLOCK\n";
        let table = DecisionTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.violations(), &[1, 0, 1]);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = DecisionTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.headers()[3], "TrustReg_rf");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = DecisionTable::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::DataNotFound(p) if p == path));
    }
}

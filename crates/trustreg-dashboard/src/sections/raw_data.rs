//! Dataset preview

use crate::page::{Block, Page, TableBlock};
use crate::section::Section;
use trustreg_core::DecisionTable;
use trustreg_utils::DashboardConfig;

pub fn build(table: &DecisionTable, config: &DashboardConfig) -> Page {
    let preview = table.head(config.preview_rows);
    let caption = format!("Showing {} of {} rows", preview.len(), table.len());

    let mut page = Page::new(Section::RawData);
    page.push(Block::header("Dataset Preview"))
        .push(Block::Table(
            TableBlock::new(table.headers().iter().cloned())
                .with_rows(preview.to_vec())
                .with_caption(caption),
        ))
        .push(Block::List {
            title: "Columns".to_string(),
            items: table.headers().to_vec(),
        });
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures::sample;

    #[test]
    fn test_preview_is_truncated() {
        let config = DashboardConfig::builder().preview_rows(2).build().unwrap();
        let page = build(&sample(), &config);

        let table = page.tables()[0];
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.caption.as_deref(), Some("Showing 2 of 5 rows"));
        assert_eq!(table.headers[1], "binary_violation");
    }

    #[test]
    fn test_column_list() {
        let page = build(&sample(), &DashboardConfig::default());
        let items = page.blocks.iter().find_map(|b| match b {
            Block::List { items, .. } => Some(items.clone()),
            _ => None,
        });
        assert_eq!(
            items.unwrap(),
            vec!["id", "binary_violation", "TrustReg_v3", "TrustReg_rf", "TrustReg_xgb"]
        );
    }
}

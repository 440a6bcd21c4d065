//! Spreadsheet-over-HTTP port and the column table it yields.
//!
//! The downloader/parser is a thin collaborator; resolvers only see a
//! [`SheetTable`] of named columns. Column lookup is case-insensitive
//! substring matching on a keyword (e.g. any column containing "CAPE"),
//! and cell coercion strips a trailing percent sign before parsing.

use crate::domain::ports::ProviderError;
use async_trait::async_trait;

/// Where to find the table inside a workbook.
#[derive(Debug, Clone, Default)]
pub struct SheetHint {
    /// Sheet name; the first sheet when absent.
    pub sheet_name: Option<String>,
    /// Rows to skip before the header row.
    pub skip_rows: usize,
}

impl SheetHint {
    pub fn sheet(name: &str, skip_rows: usize) -> Self {
        Self {
            sheet_name: Some(name.to_string()),
            skip_rows,
        }
    }
}

/// One spreadsheet cell, already decoded from the workbook format.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetCell {
    Number(f64),
    Text(String),
    Empty,
}

impl SheetCell {
    /// Coerce to a number. Text cells are trimmed and a trailing `%`
    /// is stripped before parsing; anything unparseable is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SheetCell::Number(n) => Some(*n),
            SheetCell::Text(s) => {
                let cleaned = s.trim().trim_end_matches('%').trim();
                cleaned.parse::<f64>().ok()
            }
            SheetCell::Empty => None,
        }
    }
}

/// A parsed table of named columns.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SheetCell>>,
}

impl SheetTable {
    /// Index of the first column whose header contains `keyword`,
    /// case-insensitively.
    pub fn find_column(&self, keyword: &str) -> Option<usize> {
        let wanted = keyword.to_uppercase();
        self.columns
            .iter()
            .position(|c| c.to_uppercase().contains(&wanted))
    }

    /// Last coercible value in a column, scanning from the bottom past
    /// trailing blanks and footnote text.
    pub fn last_number(&self, col: usize) -> Option<f64> {
        self.rows
            .iter()
            .rev()
            .filter_map(|row| row.get(col))
            .find_map(|cell| cell.as_number())
    }

    /// Row index of the last coercible value in a column.
    pub fn last_valid_row(&self, col: usize) -> Option<usize> {
        (0..self.rows.len())
            .rev()
            .find(|&i| self.rows[i].get(col).and_then(|c| c.as_number()).is_some())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&SheetCell> {
        self.rows.get(row)?.get(col)
    }
}

/// Spreadsheet downloader + parser behind one narrow call.
#[async_trait]
pub trait SheetProvider: Send + Sync {
    /// Download the workbook at `url` and parse the hinted sheet into
    /// a column table. Non-200 responses fail with an HTTP-status
    /// derived error.
    async fn fetch_table(&self, url: &str, hint: &SheetHint) -> Result<SheetTable, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SheetTable {
        SheetTable {
            columns: vec!["Date".into(), "Shiller CAPE Ratio".into(), "Notes".into()],
            rows: vec![
                vec![
                    SheetCell::Number(2025.11),
                    SheetCell::Number(31.2),
                    SheetCell::Empty,
                ],
                vec![
                    SheetCell::Number(2025.12),
                    SheetCell::Text("32.5".into()),
                    SheetCell::Empty,
                ],
                vec![
                    SheetCell::Empty,
                    SheetCell::Text("source: website".into()),
                    SheetCell::Empty,
                ],
            ],
        }
    }

    #[test]
    fn test_find_column_is_case_insensitive_substring() {
        let t = table();
        assert_eq!(t.find_column("CAPE"), Some(1));
        assert_eq!(t.find_column("cape"), Some(1));
        assert_eq!(t.find_column("ERP"), None);
    }

    #[test]
    fn test_last_number_skips_trailing_text() {
        let t = table();
        assert_eq!(t.last_number(1), Some(32.5));
        assert_eq!(t.last_valid_row(1), Some(1));
    }

    #[test]
    fn test_percent_stripping_coercion() {
        assert_eq!(SheetCell::Text("4.60%".into()).as_number(), Some(4.6));
        assert_eq!(SheetCell::Text(" 4.60 % ".into()).as_number(), Some(4.6));
        assert_eq!(SheetCell::Text("n/a".into()).as_number(), None);
        assert_eq!(SheetCell::Empty.as_number(), None);
        assert_eq!(SheetCell::Number(3.5).as_number(), Some(3.5));
    }
}

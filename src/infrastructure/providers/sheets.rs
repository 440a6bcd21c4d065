//! HTTP spreadsheet downloader + workbook parser.
//!
//! Downloads land in a named temporary file (calamine sniffs the format
//! from the extension) which is removed when the handle drops, on the
//! success and failure paths alike.

use crate::domain::ports::sheet_provider::{SheetCell, SheetHint, SheetProvider, SheetTable};
use crate::domain::ports::ProviderError;
use async_trait::async_trait;
use calamine::{open_workbook_auto, Data, Reader};
use std::io::Write;
use std::time::Duration;
use tracing::info;

pub struct HttpSheetClient {
    client: reqwest::Client,
}

impl HttpSheetClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpSheetClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SheetProvider for HttpSheetClient {
    async fn fetch_table(&self, url: &str, hint: &SheetHint) -> Result<SheetTable, ProviderError> {
        info!(url, "downloading spreadsheet");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Http(resp.status().as_u16()));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        // workbook decoding is blocking file I/O; keep it off the runtime
        let ext = extension_of(url);
        let hint = hint.clone();
        tokio::task::spawn_blocking(move || parse_workbook(&bytes, ext, &hint))
            .await
            .map_err(|e| ProviderError::Parse(format!("decode task: {e}")))?
    }
}

fn extension_of(url: &str) -> &'static str {
    if url.rsplit('.').next() == Some("xls") {
        ".xls"
    } else {
        ".xlsx"
    }
}

fn parse_workbook(bytes: &[u8], ext: &str, hint: &SheetHint) -> Result<SheetTable, ProviderError> {
    let mut tmp = tempfile::Builder::new()
        .prefix("macrometer")
        .suffix(ext)
        .tempfile()
        .map_err(|e| ProviderError::Parse(format!("temp file: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| ProviderError::Parse(format!("temp file: {e}")))?;

    let mut workbook = open_workbook_auto(tmp.path())
        .map_err(|e| ProviderError::Parse(format!("workbook: {e}")))?;

    let sheet_name = match &hint.sheet_name {
        Some(name) => name.clone(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ProviderError::Parse("workbook has no sheets".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ProviderError::Parse(format!("sheet '{sheet_name}': {e}")))?;

    let mut rows = range.rows().skip(hint.skip_rows);

    let columns: Vec<String> = rows
        .next()
        .ok_or_else(|| ProviderError::Parse(format!("sheet '{sheet_name}' has no header row")))?
        .iter()
        .map(cell_to_string)
        .collect();

    let rows = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(SheetTable { columns, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &Data) -> SheetCell {
    match cell {
        Data::Float(f) => SheetCell::Number(*f),
        Data::Int(i) => SheetCell::Number(*i as f64),
        Data::String(s) if s.trim().is_empty() => SheetCell::Empty,
        Data::String(s) => SheetCell::Text(s.clone()),
        Data::DateTime(dt) => SheetCell::Number(dt.as_f64()),
        Data::Bool(b) => SheetCell::Text(b.to_string()),
        _ => SheetCell::Empty,
    }
}

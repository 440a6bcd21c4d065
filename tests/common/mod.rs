//! Shared test helpers: programmable fake providers.

use async_trait::async_trait;
use chrono::NaiveDate;
use macrometer::domain::ports::quote_provider::QuoteProvider;
use macrometer::domain::ports::series_provider::{SeriesPoint, SeriesProvider};
use macrometer::domain::ports::sheet_provider::{SheetCell, SheetHint, SheetProvider, SheetTable};
use macrometer::domain::ports::ProviderError;
use macrometer::MacroMeter;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Default)]
pub struct FakeQuotes {
    prices: HashMap<String, f64>,
    pe_ratios: HashMap<String, f64>,
    fail: bool,
}

#[allow(dead_code)]
impl FakeQuotes {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.prices.insert(symbol.to_string(), price);
        self
    }

    pub fn with_pe(mut self, symbol: &str, pe: f64) -> Self {
        self.pe_ratios.insert(symbol.to_string(), pe);
        self
    }
}

#[async_trait]
impl QuoteProvider for FakeQuotes {
    async fn price(&self, symbol: &str) -> Result<Option<f64>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Network("connection refused".into()));
        }
        Ok(self.prices.get(symbol).copied())
    }

    async fn pe_ratio(&self, symbol: &str) -> Result<Option<f64>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Network("connection refused".into()));
        }
        Ok(self.pe_ratios.get(symbol).copied())
    }
}

#[derive(Default)]
pub struct FakeSeries {
    data: HashMap<String, Vec<SeriesPoint>>,
    units: HashMap<String, String>,
    fail: bool,
}

#[allow(dead_code)]
impl FakeSeries {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_series(mut self, id: &str, values: &[f64]) -> Self {
        self.data.insert(id.to_string(), monthly_points(values));
        self
    }

    pub fn with_units(mut self, id: &str, units: &str) -> Self {
        self.units.insert(id.to_string(), units.to_string());
        self
    }
}

/// Monthly observations starting January 2024.
#[allow(dead_code)]
pub fn monthly_points(values: &[f64]) -> Vec<SeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| SeriesPoint {
            date: NaiveDate::from_ymd_opt(2024 + (i as i32) / 12, (i as u32) % 12 + 1, 1).unwrap(),
            value,
        })
        .collect()
}

#[async_trait]
impl SeriesProvider for FakeSeries {
    async fn series(
        &self,
        id: &str,
        _start: Option<NaiveDate>,
        _end: Option<NaiveDate>,
    ) -> Result<Vec<SeriesPoint>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Network("service unavailable".into()));
        }
        Ok(self.data.get(id).cloned().unwrap_or_default())
    }

    async fn series_units(&self, id: &str) -> Result<Option<String>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Network("service unavailable".into()));
        }
        Ok(self.units.get(id).cloned())
    }
}

/// Tables keyed by a URL fragment; unmatched URLs come back as a 404.
#[derive(Default)]
pub struct FakeSheets {
    tables: Vec<(String, SheetTable)>,
    fail: bool,
}

#[allow(dead_code)]
impl FakeSheets {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_table(mut self, url_fragment: &str, table: SheetTable) -> Self {
        self.tables.push((url_fragment.to_string(), table));
        self
    }
}

#[async_trait]
impl SheetProvider for FakeSheets {
    async fn fetch_table(&self, url: &str, _hint: &SheetHint) -> Result<SheetTable, ProviderError> {
        if self.fail {
            return Err(ProviderError::Network("connection refused".into()));
        }
        self.tables
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, table)| table.clone())
            .ok_or(ProviderError::Http(404))
    }
}

/// A Shiller-style table: decimal-year date column plus a CAPE column.
#[allow(dead_code)]
pub fn shiller_table(rows: &[(f64, f64)]) -> SheetTable {
    SheetTable {
        columns: vec!["Date".into(), "P".into(), "CAPE".into()],
        rows: rows
            .iter()
            .map(|&(date, cape)| {
                vec![
                    SheetCell::Number(date),
                    SheetCell::Empty,
                    SheetCell::Number(cape),
                ]
            })
            .collect(),
    }
}

/// A Damodaran-style table with a textual ERP column.
#[allow(dead_code)]
pub fn damodaran_table(erp_cells: &[&str]) -> SheetTable {
    SheetTable {
        columns: vec!["Start of month".into(), "Implied ERP (FCFE)".into()],
        rows: erp_cells
            .iter()
            .map(|&erp| {
                vec![
                    SheetCell::Text("1/1/2025".into()),
                    SheetCell::Text(erp.to_string()),
                ]
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn meter(quotes: FakeQuotes, series: FakeSeries, sheets: FakeSheets) -> MacroMeter {
    meter_with_csv(quotes, series, sheets, None)
}

pub fn meter_with_csv(
    quotes: FakeQuotes,
    series: FakeSeries,
    sheets: FakeSheets,
    csv_path: Option<PathBuf>,
) -> MacroMeter {
    MacroMeter::with_providers(Arc::new(quotes), Arc::new(series), Arc::new(sheets), csv_path)
}

/// Every provider call fails.
#[allow(dead_code)]
pub fn dark_meter() -> MacroMeter {
    meter(
        FakeQuotes::failing(),
        FakeSeries::failing(),
        FakeSheets::failing(),
    )
}

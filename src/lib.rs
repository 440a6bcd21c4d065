pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::catalog::{self, IndicatorDefinition};
use crate::application::metrics::MetricsService;
use crate::domain::entities::record::CanonicalRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_provider::QuoteProvider;
use crate::domain::ports::series_provider::{SeriesPoint, SeriesProvider};
use crate::domain::ports::sheet_provider::SheetProvider;
use crate::infrastructure::export::csv::CsvExporter;
use crate::infrastructure::providers::fred::FredClient;
use crate::infrastructure::providers::sheets::HttpSheetClient;
use crate::infrastructure::providers::yahoo::YahooClient;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Explicit configuration for the facade; no process-global setup.
#[derive(Debug, Clone)]
pub struct Config {
    /// FRED API key (https://fred.stlouisfed.org/docs/api/api_key.html).
    pub fred_api_key: String,
    /// Optional CSV sink; when set, every fetched record is appended.
    pub csv_export_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        let fred_api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| DomainError::Config("FRED_API_KEY environment variable is not set".into()))?;
        let csv_export_path = std::env::var("MACROMETER_CSV").ok().map(PathBuf::from);
        Ok(Self {
            fred_api_key,
            csv_export_path,
        })
    }
}

/// Historical observations for one statistical series.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SeriesHistory {
    pub series_id: String,
    pub units: Option<String>,
    pub points: Vec<SeriesPoint>,
}

pub struct MacroMeter {
    metrics: MetricsService,
    series: Arc<dyn SeriesProvider>,
    exporter: Option<Mutex<CsvExporter>>,
}

impl MacroMeter {
    pub fn new(config: Config) -> Result<Self, DomainError> {
        let quotes: Arc<dyn QuoteProvider> = Arc::new(YahooClient::new());
        let series: Arc<dyn SeriesProvider> = Arc::new(FredClient::new(config.fred_api_key));
        let sheets: Arc<dyn SheetProvider> = Arc::new(HttpSheetClient::new());
        Ok(Self::with_providers(
            quotes,
            series,
            sheets,
            config.csv_export_path,
        ))
    }

    pub fn with_providers(
        quotes: Arc<dyn QuoteProvider>,
        series: Arc<dyn SeriesProvider>,
        sheets: Arc<dyn SheetProvider>,
        csv_export_path: Option<PathBuf>,
    ) -> Self {
        Self {
            metrics: MetricsService::new(quotes, series.clone(), sheets),
            series,
            exporter: csv_export_path.map(|path| Mutex::new(CsvExporter::new(path))),
        }
    }

    /// Ordered catalog entries for menu population.
    pub fn definitions(&self) -> Vec<IndicatorDefinition> {
        catalog::definitions()
    }

    /// Fetch one indicator by display name or normalized key. The only
    /// failure mode is an unregistered name; data-availability problems
    /// come back as null payloads inside the record. When a CSV sink is
    /// configured the record is also appended to it.
    pub async fn fetch_one(&self, name: &str) -> Result<CanonicalRecord, DomainError> {
        let def = catalog::lookup(name)?;
        let record = self.metrics.fetch_one(&def).await;
        self.export_record(def.name, &record);
        Ok(record)
    }

    /// Fetch every non-aggregate indicator and merge into one flat
    /// mapping. Never fails; individual indicators degrade to null.
    pub async fn fetch_all(&self) -> BTreeMap<String, Option<f64>> {
        self.metrics.fetch_all().await
    }

    /// Fetch every non-aggregate indicator and append each record to
    /// the configured CSV sink. Returns how many indicators were
    /// exported.
    pub async fn export_all(&self) -> Result<usize, DomainError> {
        if self.exporter.is_none() {
            return Err(DomainError::Config("no CSV export path configured".into()));
        }

        let mut exported = 0;
        for def in self.definitions() {
            if def.id.is_aggregate() {
                continue;
            }
            let record = self.metrics.fetch_one(&def).await;
            self.export_record(def.name, &record);
            exported += 1;
        }
        Ok(exported)
    }

    /// Historical observations plus units metadata for a raw series id.
    pub async fn history(
        &self,
        series_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<SeriesHistory, DomainError> {
        let points = self
            .series
            .series(series_id, start, end)
            .await
            .map_err(|e| DomainError::Provider(e.to_string()))?;

        let units = match self.series.series_units(series_id).await {
            Ok(units) => units,
            Err(e) => {
                warn!(series = series_id, error = %e, "failed to fetch series units");
                None
            }
        };

        Ok(SeriesHistory {
            series_id: series_id.to_string(),
            units,
            points,
        })
    }

    fn export_record(&self, metric: &str, record: &CanonicalRecord) {
        if let Some(exporter) = &self.exporter {
            // a poisoned lock still holds a usable exporter
            let mut exporter = exporter.lock().unwrap_or_else(|e| e.into_inner());
            exporter.export(metric, record);
        }
    }
}

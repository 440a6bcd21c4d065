use crate::domain::ports::ProviderError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

/// One dated observation in a statistical time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Statistical time-series lookup by series identifier (FRED-style).
///
/// An unknown or empty series returns `Ok(vec![])`; errors mean the
/// service itself failed.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Ordered observations for a series, oldest first, optionally
    /// bounded by start/end dates.
    async fn series(
        &self,
        id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<SeriesPoint>, ProviderError>;

    /// Units string from the series metadata, when the service knows it.
    async fn series_units(&self, id: &str) -> Result<Option<String>, ProviderError>;
}

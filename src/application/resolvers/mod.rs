//! Per-indicator fallback resolvers.
//!
//! Each resolver composes one strategy: direct lookup, primary provider
//! with a fallback provider, primary with a locally derived fallback,
//! composite arithmetic over several series, or a multi-period delta.
//! Resolvers never raise past their own boundary; upstream failures are
//! logged and become null payloads.

mod growth;
mod quotes;
mod series;
mod sheets;
mod timestamps;

use crate::domain::ports::quote_provider::QuoteProvider;
use crate::domain::ports::series_provider::SeriesProvider;
use crate::domain::ports::sheet_provider::SheetProvider;
use std::sync::Arc;
use tracing::warn;

/// Resolver state: the three provider capabilities every strategy draws
/// from. Shared immutably across all indicator resolutions.
pub struct Resolvers {
    quotes: Arc<dyn QuoteProvider>,
    series: Arc<dyn SeriesProvider>,
    sheets: Arc<dyn SheetProvider>,
}

impl Resolvers {
    pub fn new(
        quotes: Arc<dyn QuoteProvider>,
        series: Arc<dyn SeriesProvider>,
        sheets: Arc<dyn SheetProvider>,
    ) -> Self {
        Self {
            quotes,
            series,
            sheets,
        }
    }

    /// Fetch a series, converting provider faults into `None` with a
    /// log line. The uniform "absence is null, not an error" boundary.
    pub(crate) async fn safe_series(&self, id: &str) -> Option<Vec<f64>> {
        match self.series.series(id, None, None).await {
            Ok(points) => Some(points.into_iter().map(|p| p.value).collect()),
            Err(e) => {
                warn!(series = id, error = %e, "failed to fetch series");
                None
            }
        }
    }

    /// Latest observation of a series; `None` when the fetch fails or
    /// the series is empty.
    pub(crate) async fn latest(&self, id: &str) -> Option<f64> {
        self.safe_series(id).await.and_then(|values| {
            if values.is_empty() {
                None
            } else {
                values.last().copied()
            }
        })
    }
}

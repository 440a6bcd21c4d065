//! FRED (Federal Reserve Economic Data) series client.

use crate::domain::ports::series_provider::{SeriesPoint, SeriesProvider};
use crate::domain::ports::ProviderError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

const FRED_BASE: &str = "https://api.stlouisfed.org/fred";

pub struct FredClient {
    api_key: String,
    client: reqwest::Client,
}

impl FredClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, serde::Deserialize)]
struct Observation {
    date: String,
    value: String,
}

#[derive(Debug, serde::Deserialize)]
struct SeriesInfoResponse {
    seriess: Vec<SeriesInfo>,
}

#[derive(Debug, serde::Deserialize)]
struct SeriesInfo {
    #[serde(default)]
    units: Option<String>,
}

#[async_trait]
impl SeriesProvider for FredClient {
    async fn series(
        &self,
        id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<SeriesPoint>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("FRED API key is not set".into()));
        }

        let mut url = format!(
            "{FRED_BASE}/series/observations?series_id={id}&api_key={}&file_type=json",
            self.api_key
        );
        if let Some(start) = start {
            url.push_str(&format!("&observation_start={}", start.format("%Y-%m-%d")));
        }
        if let Some(end) = end {
            url.push_str(&format!("&observation_end={}", end.format("%Y-%m-%d")));
        }

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Http(resp.status().as_u16()));
        }

        let data: ObservationsResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        // FRED marks missing observations with a "." value; skip them.
        let mut points = Vec::with_capacity(data.observations.len());
        for obs in data.observations {
            let Ok(value) = obs.value.parse::<f64>() else {
                continue;
            };
            let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d")
                .map_err(|e| ProviderError::Parse(format!("bad observation date: {e}")))?;
            points.push(SeriesPoint { date, value });
        }

        Ok(points)
    }

    async fn series_units(&self, id: &str) -> Result<Option<String>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("FRED API key is not set".into()));
        }

        let url = format!(
            "{FRED_BASE}/series?series_id={id}&api_key={}&file_type=json",
            self.api_key
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Http(resp.status().as_u16()));
        }

        let data: SeriesInfoResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(data.seriess.into_iter().next().and_then(|s| s.units))
    }
}

//! Yahoo Finance quote client using the v8 chart and v10 quoteSummary
//! APIs (no auth required).

use crate::domain::ports::quote_provider::QuoteProvider;
use crate::domain::ports::ProviderError;
use async_trait::async_trait;
use std::time::Duration;

pub struct YahooClient {
    client: reqwest::Client,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(
                    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                     AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    meta: ChartMeta,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    regular_market_price: Option<f64>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryResponse {
    quote_summary: QuoteSummaryResult,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteSummaryResult {
    result: Option<Vec<QuoteSummaryData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryData {
    #[serde(default)]
    summary_detail: Option<SummaryDetail>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDetail {
    #[serde(default)]
    trailing_pe: Option<RawValue>,
}

#[derive(Debug, serde::Deserialize)]
struct RawValue {
    #[serde(default)]
    raw: Option<f64>,
}

#[async_trait]
impl QuoteProvider for YahooClient {
    async fn price(&self, symbol: &str) -> Result<Option<f64>, ProviderError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{symbol}?range=1d&interval=1d"
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

        let data: ChartResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        if let Some(err) = data.chart.error {
            return Err(ProviderError::Parse(format!("Yahoo error: {err}")));
        }

        Ok(data
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .and_then(|d| d.meta.regular_market_price))
    }

    async fn pe_ratio(&self, symbol: &str) -> Result<Option<f64>, ProviderError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{symbol}?modules=summaryDetail"
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

        let data: QuoteSummaryResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        if let Some(err) = data.quote_summary.error {
            return Err(ProviderError::Parse(format!("Yahoo error: {err}")));
        }

        Ok(data
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .and_then(|d| d.summary_detail)
            .and_then(|s| s.trailing_pe)
            .and_then(|v| v.raw))
    }
}

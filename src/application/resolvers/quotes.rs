//! Direct quote lookups: one provider call, no retry. An absent or
//! zero-like price is a null scalar; a provider fault is logged and
//! becomes a null scalar.

use super::Resolvers;
use crate::domain::values::outcome::IndicatorOutcome;
use tracing::{info, warn};

impl Resolvers {
    /// Trailing P/E of VTI, a proxy for the entire US market.
    pub(crate) async fn pe_ratio(&self) -> IndicatorOutcome {
        match self.quotes.pe_ratio("VTI").await {
            Ok(Some(pe)) if pe != 0.0 => {
                info!(symbol = "VTI", value = pe, "found P/E ratio");
                IndicatorOutcome::Scalar(Some(pe))
            }
            Ok(_) => {
                warn!(symbol = "VTI", "no P/E ratio data available");
                IndicatorOutcome::null_scalar()
            }
            Err(e) => {
                warn!(symbol = "VTI", error = %e, "error fetching P/E ratio");
                IndicatorOutcome::null_scalar()
            }
        }
    }

    /// Spot price for a quoted asset (gold, bitcoin, WTI crude).
    pub(crate) async fn asset_price(&self, symbol: &str, asset: &str) -> IndicatorOutcome {
        match self.quotes.price(symbol).await {
            Ok(Some(price)) if price != 0.0 => {
                info!(symbol, asset, value = price, "found asset price");
                IndicatorOutcome::Scalar(Some(price))
            }
            Ok(_) => {
                warn!(symbol, asset, "no price data available");
                IndicatorOutcome::null_scalar()
            }
            Err(e) => {
                warn!(symbol, asset, error = %e, "error fetching asset price");
                IndicatorOutcome::null_scalar()
            }
        }
    }
}

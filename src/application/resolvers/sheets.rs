//! Spreadsheet-backed resolvers with fallbacks.
//!
//! CAPE falls back to an equivalent FRED series when the Shiller
//! workbook cannot be fetched or the expected column is missing. The
//! equity risk premium falls back to a local approximation built from
//! two other indicators (earnings yield minus the risk-free rate).

use super::Resolvers;
use crate::domain::ports::sheet_provider::SheetHint;
use crate::domain::values::growth::earnings_yield;
use crate::domain::values::outcome::IndicatorOutcome;
use tracing::{info, warn};

pub(crate) const SHILLER_URL: &str = "http://www.econ.yale.edu/~shiller/data/ie_data.xls";
pub(crate) const DAMODARAN_URL: &str =
    "https://pages.stern.nyu.edu/~adamodar/pc/implprem/ERPbymonth.xlsx";

/// The Shiller workbook keeps its table on the "Data" sheet under seven
/// rows of preamble.
pub(crate) fn shiller_hint() -> SheetHint {
    SheetHint::sheet("Data", 7)
}

impl Resolvers {
    /// Cyclically adjusted P/E from Shiller's dataset, falling back to
    /// the FRED monthly Shiller P/E series.
    pub(crate) async fn cape_ratio(&self) -> IndicatorOutcome {
        match self.cape_from_sheet().await {
            Some(cape) => {
                info!(value = cape, "found CAPE ratio");
                IndicatorOutcome::Scalar(Some(cape))
            }
            None => {
                warn!("falling back to FRED for CAPE ratio");
                IndicatorOutcome::Scalar(self.latest("MULTPL/SHILLER_PE_RATIO_MONTH").await)
            }
        }
    }

    async fn cape_from_sheet(&self) -> Option<f64> {
        let table = match self.sheets.fetch_table(SHILLER_URL, &shiller_hint()).await {
            Ok(table) => table,
            Err(e) => {
                warn!(url = SHILLER_URL, error = %e, "failed to download Shiller data");
                return None;
            }
        };

        let Some(col) = table.find_column("CAPE") else {
            warn!("could not find CAPE column in Shiller's data");
            return None;
        };

        table.last_number(col)
    }

    /// Implied equity risk premium from Damodaran's dataset, falling
    /// back to a local approximation when the download or column lookup
    /// fails.
    pub(crate) async fn equity_risk_premium(&self) -> IndicatorOutcome {
        match self.erp_from_sheet().await {
            Some(erp) => {
                info!(value = erp, "found equity risk premium");
                IndicatorOutcome::group(vec![("value", Some(erp))])
            }
            None => self.calculated_risk_premium().await,
        }
    }

    async fn erp_from_sheet(&self) -> Option<f64> {
        let table = match self
            .sheets
            .fetch_table(DAMODARAN_URL, &SheetHint::default())
            .await
        {
            Ok(table) => table,
            Err(e) => {
                warn!(url = DAMODARAN_URL, error = %e, "failed to download Damodaran data");
                return None;
            }
        };

        let Some(col) = table.find_column("ERP") else {
            warn!("could not find ERP column in Damodaran's data");
            return None;
        };

        // last_number coerces text cells, stripping a trailing %.
        table.last_number(col)
    }

    /// Approximate risk premium: earnings yield (inverse of the market
    /// P/E) minus the 10-year Treasury yield. Guards against a
    /// non-positive P/E rather than dividing by it.
    async fn calculated_risk_premium(&self) -> IndicatorOutcome {
        warn!("falling back to calculation for equity risk premium");

        let pe = match self.pe_ratio().await {
            IndicatorOutcome::Scalar(Some(pe)) => pe,
            _ => {
                warn!("could not calculate earnings yield: invalid P/E ratio");
                return IndicatorOutcome::group(vec![("value", None)]);
            }
        };

        let Some(ey) = earnings_yield(pe) else {
            warn!("could not calculate earnings yield: invalid P/E ratio");
            return IndicatorOutcome::group(vec![("value", None)]);
        };

        let Some(risk_free) = self.latest("DGS10").await else {
            warn!("could not get risk-free rate");
            return IndicatorOutcome::group(vec![("value", None)]);
        };

        let premium = ey - risk_free;
        info!(
            premium,
            earnings_yield = ey,
            risk_free,
            "calculated equity risk premium"
        );

        IndicatorOutcome::group(vec![
            ("value", Some(premium)),
            ("earnings_yield", Some(ey)),
            ("risk_free_rate", Some(risk_free)),
        ])
    }
}

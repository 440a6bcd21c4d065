//! Multi-period delta resolvers: year-over-year changes computed from
//! two indexed observations of one series, with minimum-sample and
//! denominator guards.

use super::Resolvers;
use crate::domain::values::growth::yoy_percent_change;
use crate::domain::values::outcome::IndicatorOutcome;
use tracing::{info, warn};

/// CPI is monthly: a year-over-year change needs 13 observations.
const INFLATION_MIN_SAMPLES: usize = 13;

/// Corporate profits are quarterly: a year-over-year change needs 5.
const EARNINGS_MIN_SAMPLES: usize = 5;

impl Resolvers {
    /// CPI year-over-year percentage change (CPIAUCSL).
    pub(crate) async fn inflation_rate(&self) -> IndicatorOutcome {
        let Some(cpi) = self.safe_series("CPIAUCSL").await else {
            return IndicatorOutcome::null_scalar();
        };

        match yoy_percent_change(&cpi, 12, INFLATION_MIN_SAMPLES) {
            Some(rate) => {
                info!(rate, "calculated inflation rate");
                IndicatorOutcome::Scalar(Some(rate))
            }
            None => {
                warn!(
                    observations = cpi.len(),
                    "not enough CPI data to calculate inflation"
                );
                IndicatorOutcome::null_scalar()
            }
        }
    }

    /// Corporate profits year-over-year growth (CP), a proxy for S&P
    /// 500 earnings growth.
    pub(crate) async fn earnings_growth(&self) -> IndicatorOutcome {
        let Some(profits) = self.safe_series("CP").await else {
            return IndicatorOutcome::group(vec![("growth_rate", None)]);
        };

        match yoy_percent_change(&profits, 4, EARNINGS_MIN_SAMPLES) {
            Some(rate) => {
                let recent = profits[profits.len() - 1];
                let year_ago = profits[profits.len() - 5];
                info!(rate, recent, year_ago, "calculated corporate profits growth");
                IndicatorOutcome::group(vec![
                    ("growth_rate", Some(rate)),
                    ("recent_value", Some(recent)),
                    ("year_ago_value", Some(year_ago)),
                ])
            }
            None => {
                warn!(
                    observations = profits.len(),
                    "cannot calculate earnings growth (too few samples or non-positive prior)"
                );
                IndicatorOutcome::group(vec![("growth_rate", None)])
            }
        }
    }
}

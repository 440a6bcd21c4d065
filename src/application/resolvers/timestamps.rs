//! Per-indicator as-of date resolution.
//!
//! Runs independently of whether the value fetch succeeded: series-backed
//! indicators use the last index of the underlying series; the CAPE ratio
//! reads a decimal-year cell from the Shiller workbook with a FRED series
//! fallback; everything else is stamped with the current date. Resolution
//! always yields a literal string; internal failure yields the
//! "Date not available" sentinel instead of raising.

use super::sheets::{shiller_hint, SHILLER_URL};
use super::Resolvers;
use crate::domain::entities::record::DATE_NOT_AVAILABLE;
use crate::domain::values::indicator::IndicatorId;
use chrono::{Local, NaiveDate};
use tracing::warn;

impl Resolvers {
    /// The as-of date for an indicator, `YYYY-MM-DD` or the sentinel.
    pub(crate) async fn as_of(&self, id: IndicatorId) -> String {
        let resolved = match id {
            IndicatorId::Gdp => self.last_series_date("GDP").await,
            IndicatorId::Government => self.last_series_date("GFDEBTN").await,
            IndicatorId::InflationRate => self.last_series_date("CPIAUCSL").await,
            IndicatorId::CreditSpreads => self.last_series_date("BAA").await,
            IndicatorId::CapeRatio => match self.cape_sheet_date().await {
                Some(date) => Some(date),
                None => self.last_series_date("CSUSHPINSA").await,
            },
            _ => Some(Local::now().date_naive()),
        };

        match resolved {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => DATE_NOT_AVAILABLE.to_string(),
        }
    }

    async fn last_series_date(&self, id: &str) -> Option<NaiveDate> {
        match self.series.series(id, None, None).await {
            Ok(points) => points.last().map(|p| p.date),
            Err(e) => {
                warn!(series = id, error = %e, "failed to resolve series date");
                None
            }
        }
    }

    /// Date of the last valid CAPE observation in the Shiller workbook.
    /// The sheet stores dates as decimal year-and-month (e.g. 2023.1).
    async fn cape_sheet_date(&self) -> Option<NaiveDate> {
        let table = self
            .sheets
            .fetch_table(SHILLER_URL, &shiller_hint())
            .await
            .ok()?;
        let date_col = table.find_column("Date")?;
        let cape_col = table.find_column("CAPE")?;
        let row = table.last_valid_row(cape_col)?;
        let raw = table.cell(row, date_col)?.as_number()?;
        decimal_year_to_date(raw)
    }
}

/// Convert a decimal year-and-month cell to the first of that month.
pub(crate) fn decimal_year_to_date(raw: f64) -> Option<NaiveDate> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    let year = raw.trunc() as i32;
    let month = (((raw - raw.trunc()) * 12.0).round() as u32 + 1).min(12);
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_decimal_year_conversion() {
        let date = decimal_year_to_date(2023.0).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());

        // .5 of a year rounds to the 7th month
        let date = decimal_year_to_date(2023.5).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
    }

    #[test]
    fn test_decimal_year_clamps_month() {
        // Fractions near a full year cannot spill into month 13
        let date = decimal_year_to_date(2023.99).unwrap();
        assert_eq!(date.month(), 12);
    }

    #[test]
    fn test_invalid_decimal_year() {
        assert_eq!(decimal_year_to_date(f64::NAN), None);
        assert_eq!(decimal_year_to_date(-1.0), None);
    }
}

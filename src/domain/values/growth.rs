//! Year-over-year percentage change over an indexed series.
//!
//! Used by the inflation (monthly, 13 observations) and earnings-growth
//! (quarterly, 5 observations) computations. Below the minimum sample
//! count, or with a non-positive prior-period value, the computation
//! yields `None` instead of attempting the arithmetic.

/// Compare the latest observation against the one `periods_back`
/// positions earlier and return the percent change.
///
/// Returns `None` when the series holds fewer than `min_samples`
/// observations or the prior-period value is zero or negative.
pub fn yoy_percent_change(values: &[f64], periods_back: usize, min_samples: usize) -> Option<f64> {
    if values.len() < min_samples {
        return None;
    }

    let latest = *values.last()?;
    let prior = *values.get(values.len().checked_sub(periods_back + 1)?)?;

    if prior <= 0.0 {
        return None;
    }

    Some(((latest / prior) - 1.0) * 100.0)
}

/// Earnings yield in percent: the inverse of a price ratio. Guards
/// against a non-positive ratio.
pub fn earnings_yield(pe_ratio: f64) -> Option<f64> {
    if pe_ratio > 0.0 {
        Some((1.0 / pe_ratio) * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_months_is_too_small() {
        let series: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        assert_eq!(yoy_percent_change(&series, 12, 13), None);
    }

    #[test]
    fn test_thirteen_months_yields_ten_percent() {
        let mut series = vec![100.0];
        series.extend(std::iter::repeat(105.0).take(11));
        series.push(110.0);
        assert_eq!(series.len(), 13);

        let change = yoy_percent_change(&series, 12, 13).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarterly_growth() {
        // Five quarters: a year ago = index -5
        let series = vec![200.0, 210.0, 215.0, 218.0, 220.0];
        let change = yoy_percent_change(&series, 4, 5).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_prior_returns_none() {
        let series = vec![0.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(yoy_percent_change(&series, 4, 5), None);

        let series = vec![-5.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(yoy_percent_change(&series, 4, 5), None);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(yoy_percent_change(&[], 12, 13), None);
    }

    #[test]
    fn test_earnings_yield_guards_zero_ratio() {
        assert_eq!(earnings_yield(0.0), None);
        assert_eq!(earnings_yield(-4.0), None);
        let ey = earnings_yield(20.0).unwrap();
        assert!((ey - 5.0).abs() < 1e-9);
    }
}

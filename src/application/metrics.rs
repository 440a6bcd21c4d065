//! The metrics service: resolver dispatch, canonical-record assembly,
//! and the aggregate fetch that merges every indicator into one flat
//! mapping.

use crate::application::catalog::{self, IndicatorDefinition};
use crate::application::resolvers::Resolvers;
use crate::domain::entities::record::CanonicalRecord;
use crate::domain::ports::quote_provider::QuoteProvider;
use crate::domain::ports::series_provider::SeriesProvider;
use crate::domain::ports::sheet_provider::SheetProvider;
use crate::domain::values::indicator::IndicatorId;
use crate::domain::values::outcome::{GroupValue, IndicatorOutcome};
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct MetricsService {
    resolvers: Resolvers,
}

impl MetricsService {
    pub fn new(
        quotes: Arc<dyn QuoteProvider>,
        series: Arc<dyn SeriesProvider>,
        sheets: Arc<dyn SheetProvider>,
    ) -> Self {
        Self {
            resolvers: Resolvers::new(quotes, series, sheets),
        }
    }

    /// Produce the raw outcome for one indicator. Total over the
    /// catalog: data-availability failures surface as null payloads,
    /// never as errors.
    pub async fn resolve(&self, id: IndicatorId) -> IndicatorOutcome {
        match id {
            IndicatorId::PeRatio => self.resolvers.pe_ratio().await,
            IndicatorId::CapeRatio => self.resolvers.cape_ratio().await,
            IndicatorId::CreditSpreads => self.resolvers.credit_spreads().await,
            IndicatorId::MarketToGdp => self.resolvers.market_to_gdp().await,
            IndicatorId::Gdp => self.resolvers.gdp_metrics().await,
            IndicatorId::Government => self.resolvers.government_metrics().await,
            IndicatorId::Yield10y => self.resolvers.yield_10y().await,
            IndicatorId::InflationRate => self.resolvers.inflation_rate().await,
            IndicatorId::EquityRiskPremium => self.resolvers.equity_risk_premium().await,
            IndicatorId::EarningsGrowth => self.resolvers.earnings_growth().await,
            IndicatorId::GoldPrice => self.resolvers.asset_price("GC=F", "Gold").await,
            IndicatorId::BitcoinPrice => self.resolvers.asset_price("BTC-USD", "Bitcoin").await,
            IndicatorId::WtiCrudePrice => {
                self.resolvers.asset_price("CL=F", "WTI Crude Oil").await
            }
            IndicatorId::AllMetrics => {
                let merged = Box::pin(self.fetch_all()).await;
                IndicatorOutcome::FlatGroup(merged.into_iter().collect())
            }
        }
    }

    /// Resolve an indicator and attach its as-of date and source label.
    pub async fn fetch_one(&self, def: &IndicatorDefinition) -> CanonicalRecord {
        let outcome = self.resolve(def.id).await;
        let as_of = self.resolvers.as_of(def.id).await;
        CanonicalRecord::new(outcome, as_of, def.source_label)
    }

    /// Fetch every non-aggregate indicator and merge the outcomes into
    /// one flat mapping. A single indicator's failure never aborts the
    /// batch; merge follows catalog registration order, so colliding
    /// sub-keys favor whichever indicator registers later.
    pub async fn fetch_all(&self) -> BTreeMap<String, Option<f64>> {
        let mut merged = BTreeMap::new();

        for def in catalog::definitions() {
            if def.id.is_aggregate() {
                continue;
            }
            let outcome = self.resolve(def.id).await;
            collapse_into(&mut merged, def.id, outcome);
        }

        merged
    }
}

/// Collapse one outcome into the flat aggregate mapping.
///
/// A scalar contributes one entry under the indicator's normalized key.
/// A group carrying a `value` sub-key collapses the same way (its other
/// sub-keys are diagnostic context and are dropped here). Any other
/// group contributes its sub-keys directly, without the indicator name
/// as a prefix; nested sub-group leaves contribute as `outer_inner`.
fn collapse_into(
    merged: &mut BTreeMap<String, Option<f64>>,
    id: IndicatorId,
    outcome: IndicatorOutcome,
) {
    if let Some(value) = outcome.value_entry() {
        merged.insert(id.key(), value);
        return;
    }

    match outcome {
        IndicatorOutcome::Scalar(v) => {
            merged.insert(id.key(), v);
        }
        IndicatorOutcome::FlatGroup(entries) => {
            for (k, v) in entries {
                merged.insert(k, v);
            }
        }
        IndicatorOutcome::NestedGroup(entries) => {
            for (outer, value) in entries {
                match value {
                    GroupValue::Leaf(v) => {
                        merged.insert(outer, v);
                    }
                    GroupValue::Group(inner) => {
                        for (ik, iv) in inner {
                            merged.insert(format!("{outer}_{ik}"), iv);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_collapses_under_indicator_key() {
        let mut merged = BTreeMap::new();
        collapse_into(
            &mut merged,
            IndicatorId::PeRatio,
            IndicatorOutcome::Scalar(Some(24.0)),
        );
        assert_eq!(merged.get("pe_ratio"), Some(&Some(24.0)));
    }

    #[test]
    fn test_group_merges_subkeys_unprefixed() {
        let mut merged = BTreeMap::new();
        collapse_into(
            &mut merged,
            IndicatorId::CreditSpreads,
            IndicatorOutcome::group(vec![("baa_yield", Some(6.5)), ("baa_spread", Some(2.3))]),
        );
        assert_eq!(merged.get("baa_yield"), Some(&Some(6.5)));
        assert!(!merged.contains_key("credit_spreads"));
    }

    #[test]
    fn test_value_key_group_collapses_to_scalar_entry() {
        // The equity-risk-premium fallback shape: the diagnostic keys
        // are dropped from the aggregate map.
        let mut merged = BTreeMap::new();
        collapse_into(
            &mut merged,
            IndicatorId::EquityRiskPremium,
            IndicatorOutcome::group(vec![
                ("value", Some(4.1)),
                ("earnings_yield", Some(7.3)),
                ("risk_free_rate", Some(3.2)),
            ]),
        );
        assert_eq!(merged.get("equity_risk_premium"), Some(&Some(4.1)));
        assert!(!merged.contains_key("earnings_yield"));
    }

    #[test]
    fn test_later_indicator_wins_key_collisions() {
        let mut merged = BTreeMap::new();
        collapse_into(
            &mut merged,
            IndicatorId::Gdp,
            IndicatorOutcome::group(vec![("gdp", Some(1.0))]),
        );
        collapse_into(
            &mut merged,
            IndicatorId::Government,
            IndicatorOutcome::group(vec![("gdp", Some(2.0))]),
        );
        assert_eq!(merged.get("gdp"), Some(&Some(2.0)));
    }

    #[test]
    fn test_nested_group_collapses_with_outer_inner_keys() {
        let mut merged = BTreeMap::new();
        collapse_into(
            &mut merged,
            IndicatorId::CreditSpreads,
            IndicatorOutcome::NestedGroup(vec![(
                "credit".into(),
                GroupValue::Group(vec![("baa".into(), Some(6.5))]),
            )]),
        );
        assert_eq!(merged.get("credit_baa"), Some(&Some(6.5)));
    }
}

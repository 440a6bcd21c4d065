//! Series-backed resolvers: single-series lookups and composites that
//! combine several series arithmetically. A composite with any missing
//! input returns an all-null group; partial results are never
//! synthesized from partial inputs.

use super::Resolvers;
use crate::domain::values::outcome::IndicatorOutcome;
use tracing::info;

impl Resolvers {
    /// Latest 10-year Treasury yield (DGS10).
    pub(crate) async fn yield_10y(&self) -> IndicatorOutcome {
        IndicatorOutcome::Scalar(self.latest("DGS10").await)
    }

    /// Stock market capitalization to GDP, the Buffett indicator.
    pub(crate) async fn market_to_gdp(&self) -> IndicatorOutcome {
        IndicatorOutcome::Scalar(self.latest("DDDM01USA156NWDB").await)
    }

    /// BAA corporate bond yield minus the 10-year Treasury yield.
    pub(crate) async fn credit_spreads(&self) -> IndicatorOutcome {
        let baa = self.latest("BAA").await;
        let treasury = self.latest("DGS10").await;

        let (Some(baa), Some(treasury)) = (baa, treasury) else {
            return IndicatorOutcome::null_group(&["baa_yield", "treasury_10y", "baa_spread"]);
        };

        let spread = baa - treasury;
        info!(baa, treasury, spread, "computed credit spread");

        IndicatorOutcome::group(vec![
            ("baa_yield", Some(baa)),
            ("treasury_10y", Some(treasury)),
            ("baa_spread", Some(spread)),
        ])
    }

    /// Nominal GDP plus the real GDP growth rate.
    pub(crate) async fn gdp_metrics(&self) -> IndicatorOutcome {
        let gdp = self.latest("GDP").await;
        let growth = self.latest("A191RL1Q225SBEA").await;

        let (Some(gdp), Some(growth)) = (gdp, growth) else {
            return IndicatorOutcome::null_group(&["gdp", "gdp_growth"]);
        };

        IndicatorOutcome::group(vec![("gdp", Some(gdp)), ("gdp_growth", Some(growth))])
    }

    /// Federal debt, surplus/deficit, and the debt-to-GDP ratio. Debt
    /// and deficit are both required; debt-to-GDP alone degrades to
    /// null when the GDP series is unavailable.
    pub(crate) async fn government_metrics(&self) -> IndicatorOutcome {
        let debt = self.latest("GFDEBTN").await;
        let deficit = self.latest("FYFSD").await;

        let (Some(debt), Some(deficit)) = (debt, deficit) else {
            return IndicatorOutcome::null_group(&["govt_debt", "govt_deficit", "debt_to_gdp"]);
        };

        let debt_to_gdp = self
            .latest("GDP")
            .await
            .map(|gdp| (debt / gdp) * 100.0);

        IndicatorOutcome::group(vec![
            ("govt_debt", Some(debt)),
            ("govt_deficit", Some(deficit)),
            ("debt_to_gdp", debt_to_gdp),
        ])
    }
}

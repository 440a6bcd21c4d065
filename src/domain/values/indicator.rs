use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of tracked indicators. Variant order is the canonical
/// display and iteration order for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    PeRatio,
    CapeRatio,
    CreditSpreads,
    MarketToGdp,
    Gdp,
    Government,
    Yield10y,
    InflationRate,
    EquityRiskPremium,
    EarningsGrowth,
    GoldPrice,
    BitcoinPrice,
    WtiCrudePrice,
    AllMetrics,
}

impl IndicatorId {
    /// All indicators in registration order, the synthetic aggregate last.
    pub const ALL: [IndicatorId; 14] = [
        IndicatorId::PeRatio,
        IndicatorId::CapeRatio,
        IndicatorId::CreditSpreads,
        IndicatorId::MarketToGdp,
        IndicatorId::Gdp,
        IndicatorId::Government,
        IndicatorId::Yield10y,
        IndicatorId::InflationRate,
        IndicatorId::EquityRiskPremium,
        IndicatorId::EarningsGrowth,
        IndicatorId::GoldPrice,
        IndicatorId::BitcoinPrice,
        IndicatorId::WtiCrudePrice,
        IndicatorId::AllMetrics,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            IndicatorId::PeRatio => "US P/E Ratio",
            IndicatorId::CapeRatio => "US CAPE Ratio",
            IndicatorId::CreditSpreads => "US Credit Spreads",
            IndicatorId::MarketToGdp => "US Stock Market / GDP",
            IndicatorId::Gdp => "US GDP",
            IndicatorId::Government => "US Government Debt & Deficit",
            IndicatorId::Yield10y => "US 10-Year Yield",
            IndicatorId::InflationRate => "US Inflation Rate",
            IndicatorId::EquityRiskPremium => "US Equity Risk Premium",
            IndicatorId::EarningsGrowth => "US Earnings Growth",
            IndicatorId::GoldPrice => "Gold Price",
            IndicatorId::BitcoinPrice => "Bitcoin Price",
            IndicatorId::WtiCrudePrice => "WTI Crude Oil Price",
            IndicatorId::AllMetrics => "US All Metrics",
        }
    }

    /// Normalized flat-map key for this indicator. Indicators not
    /// explicitly enumerated fall back to lower-snake-casing the
    /// display name.
    pub fn key(&self) -> String {
        match self {
            IndicatorId::PeRatio => "pe_ratio".into(),
            IndicatorId::CapeRatio => "cape_ratio".into(),
            IndicatorId::CreditSpreads => "credit_spreads".into(),
            IndicatorId::MarketToGdp => "market_to_gdp".into(),
            IndicatorId::Gdp => "gdp".into(),
            IndicatorId::Government => "government".into(),
            IndicatorId::Yield10y => "10yr_yield".into(),
            IndicatorId::InflationRate => "inflation_rate".into(),
            IndicatorId::EquityRiskPremium => "equity_risk_premium".into(),
            IndicatorId::EarningsGrowth => "earnings_growth".into(),
            IndicatorId::GoldPrice => "gold_price".into(),
            IndicatorId::BitcoinPrice => "bitcoin_price".into(),
            IndicatorId::WtiCrudePrice => "wti_crude_price".into(),
            _ => self.display_name().to_lowercase().replace(' ', "_"),
        }
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            IndicatorId::PeRatio => "Yahoo Finance - VTI (Total US Market)",
            IndicatorId::CapeRatio => "Robert Shiller's Dataset",
            IndicatorId::CreditSpreads => "FRED - Moody's BAA Corporate Bond",
            IndicatorId::MarketToGdp => "FRED - Stock Market Capitalization to GDP",
            IndicatorId::Gdp => "FRED - Bureau of Economic Analysis",
            IndicatorId::Government => "FRED - Treasury Department",
            IndicatorId::Yield10y => "FRED - Treasury Department",
            IndicatorId::InflationRate => "FRED - Bureau of Labor Statistics",
            IndicatorId::EquityRiskPremium => "NYU Stern - Aswath Damodaran",
            IndicatorId::EarningsGrowth => "FRED - Corporate Profits",
            IndicatorId::GoldPrice => "Yahoo Finance - Gold Futures (GC=F)",
            IndicatorId::BitcoinPrice => "Yahoo Finance - BTC-USD",
            IndicatorId::WtiCrudePrice => "Yahoo Finance - Crude Oil Futures (CL=F)",
            IndicatorId::AllMetrics => "Multiple Sources",
        }
    }

    /// The synthetic aggregate iterates every other entry and must
    /// exclude itself.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, IndicatorId::AllMetrics)
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for IndicatorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        for id in IndicatorId::ALL {
            if id.display_name().to_lowercase() == wanted || id.key() == wanted {
                return Ok(id);
            }
        }
        Err(format!("Unknown indicator: {s}"))
    }
}

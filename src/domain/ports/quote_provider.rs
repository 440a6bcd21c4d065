use crate::domain::ports::ProviderError;
use async_trait::async_trait;

/// Quote lookup by ticker symbol.
///
/// Absence of a field is signaled by `Ok(None)`, not an error; errors
/// mean the provider itself could not be reached or decoded.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Current market price for a symbol.
    async fn price(&self, symbol: &str) -> Result<Option<f64>, ProviderError>;

    /// Trailing price/earnings ratio for a symbol.
    async fn pe_ratio(&self, symbol: &str) -> Result<Option<f64>, ProviderError>;
}

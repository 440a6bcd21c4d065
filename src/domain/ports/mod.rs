pub mod quote_provider;
pub mod series_provider;
pub mod sheet_provider;

/// Error a provider call can surface. Resolvers treat every variant as
/// a data-availability condition: log it, fall back or return null.
#[derive(Debug)]
pub enum ProviderError {
    /// HTTP or network error reaching the provider
    Network(String),
    /// Non-200 response status
    Http(u16),
    /// Response decoding error
    Parse(String),
    /// Configuration error (missing API key, etc.)
    Config(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "Network error: {msg}"),
            ProviderError::Http(status) => write!(f, "Failed to fetch data: HTTP {status}"),
            ProviderError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ProviderError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Provider(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Parse(s.to_string())
    }
}

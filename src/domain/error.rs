use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid filter value: {0}")]
    InvalidFilterValue(String),

    #[error("Search backend error: {0}")]
    BackendQuery(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Content filter rejected the response after {0} attempts")]
    ContentFilterExhausted(usize),

    #[error("Unknown retrieval mode: {0}")]
    UnknownMode(String),

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::BackendQuery(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidFilterValue(s.to_string())
    }
}

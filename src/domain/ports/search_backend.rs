use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::values::search_request::SearchRequest;
use async_trait::async_trait;

/// One ranked hit: the stored report plus the highlighted excerpt when
/// the request asked for one.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub report: Report,
    pub highlight: Option<String>,
}

/// Read-only search collaborator. One round trip per call; an empty hit
/// list is a valid response, not an error.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn query(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, DomainError>;
}

use crate::application::filter_translator;
use crate::application::PAGE_SIZE;
use crate::domain::error::DomainError;
use crate::domain::ports::search_backend::SearchBackend;
use crate::domain::values::filter_selection::FilterSelection;
use crate::domain::values::retrieval_result::RetrievalResult;
use crate::domain::values::search_request::{MatchClause, SearchRequest};
use std::sync::Arc;
use tracing::info;

/// Sparse-vector retrieval: the backend expands the query into weighted
/// terms and scores them against each document's precomputed
/// details embedding. No span highlighting; the match is semantic.
pub struct SemanticRetriever {
    backend: Arc<dyn SearchBackend>,
}

impl SemanticRetriever {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    pub async fn search(
        &self,
        query_text: &str,
        selection: &FilterSelection,
    ) -> Result<RetrievalResult, DomainError> {
        info!(query = query_text, "performing sparse-vector search");

        let request = SearchRequest {
            clause: MatchClause::SparseVector {
                field: "details_embeddings".to_string(),
                query: query_text.to_string(),
            },
            filter: filter_translator::translate(selection),
            size: PAGE_SIZE,
            highlight: None,
        };

        let hits = self.backend.query(&request).await?;
        Ok(RetrievalResult {
            reports: hits.into_iter().map(|h| h.report).collect(),
            highlights: Default::default(),
        })
    }
}

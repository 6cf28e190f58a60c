use crate::application::filter_translator;
use crate::application::PAGE_SIZE;
use crate::domain::error::DomainError;
use crate::domain::ports::search_backend::SearchBackend;
use crate::domain::values::filter_selection::FilterSelection;
use crate::domain::values::retrieval_result::RetrievalResult;
use crate::domain::values::search_request::{HighlightSpec, MatchClause, SearchRequest};
use std::sync::Arc;
use tracing::info;

/// Markers the presentation layer understands as emphasis.
const HIGHLIGHT_PRE: &str = "**:violet-background[";
const HIGHLIGHT_POST: &str = "]**";
const FRAGMENT_SIZE: usize = 1000;

/// Keyword / full-text retrieval over the details field, with
/// highlighted excerpts for the matched spans.
pub struct LexicalRetriever {
    backend: Arc<dyn SearchBackend>,
}

impl LexicalRetriever {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    pub async fn search(
        &self,
        query_text: &str,
        selection: &FilterSelection,
    ) -> Result<RetrievalResult, DomainError> {
        info!(query = query_text, "performing lexical search");

        let request = SearchRequest {
            clause: MatchClause::FullText {
                field: "details".to_string(),
                query: query_text.to_string(),
            },
            filter: filter_translator::translate(selection),
            size: PAGE_SIZE,
            highlight: Some(HighlightSpec {
                field: "details".to_string(),
                pre_tag: HIGHLIGHT_PRE.to_string(),
                post_tag: HIGHLIGHT_POST.to_string(),
                fragment_size: FRAGMENT_SIZE,
            }),
        };

        let hits = self.backend.query(&request).await?;
        let mut result = RetrievalResult::default();
        for hit in hits {
            if let Some(excerpt) = hit.highlight {
                result
                    .highlights
                    .insert(hit.report.report_id.clone(), excerpt);
            }
            result.reports.push(hit.report);
        }
        Ok(result)
    }
}

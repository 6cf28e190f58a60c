use crate::application::completion::CompletionEngine;
use crate::application::lexical::LexicalRetriever;
use crate::application::rag::RagOrchestrator;
use crate::application::semantic::SemanticRetriever;
use crate::domain::error::DomainError;
use crate::domain::values::filter_selection::FilterSelection;
use crate::domain::values::retrieval_mode::RetrievalMode;
use crate::domain::values::retrieval_result::{CompletionResult, RetrievalResult};

pub const NO_RESULTS: &str = "No results found.";
pub const SEE_BELOW: &str = "See below for reports.";

/// The router's entire contract with the presentation layer: a display
/// line and, for retrieval-backed modes, the reports to render.
#[derive(Debug)]
pub struct RouteOutcome {
    pub display: String,
    pub results: Option<RetrievalResult>,
}

/// Dispatches a query to one of the four retrieval strategies.
pub struct RetrievalRouter {
    lexical: LexicalRetriever,
    semantic: SemanticRetriever,
    completion: CompletionEngine,
    rag: RagOrchestrator,
}

impl RetrievalRouter {
    pub fn new(
        lexical: LexicalRetriever,
        semantic: SemanticRetriever,
        completion: CompletionEngine,
        rag: RagOrchestrator,
    ) -> Self {
        Self {
            lexical,
            semantic,
            completion,
            rag,
        }
    }

    /// The mode string is parsed before any backend call so an
    /// unregistered mode fails without side effects.
    pub async fn route(
        &self,
        query_text: &str,
        mode: &str,
        selection: &FilterSelection,
    ) -> Result<RouteOutcome, DomainError> {
        let mode: RetrievalMode = mode.parse()?;
        match mode {
            RetrievalMode::LexicalBasic => {
                let results = self.lexical.search(query_text, selection).await?;
                Ok(retrieval_outcome(results))
            }
            RetrievalMode::Semantic => {
                let results = self.semantic.search(query_text, selection).await?;
                Ok(retrieval_outcome(results))
            }
            RetrievalMode::Completion => {
                let text = self.completion.complete(query_text).await?;
                Ok(completion_outcome(CompletionResult::Plain(text)))
            }
            RetrievalMode::Rag => {
                let result = self.rag.answer(query_text, selection).await?;
                Ok(completion_outcome(result))
            }
        }
    }
}

fn completion_outcome(result: CompletionResult) -> RouteOutcome {
    match result {
        CompletionResult::Plain(text) => RouteOutcome {
            display: text,
            results: None,
        },
        CompletionResult::Grounded { text, context } => RouteOutcome {
            display: text,
            results: Some(context),
        },
    }
}

fn retrieval_outcome(results: RetrievalResult) -> RouteOutcome {
    let display = if results.is_empty() {
        NO_RESULTS
    } else {
        SEE_BELOW
    };
    RouteOutcome {
        display: display.to_string(),
        results: Some(results),
    }
}

use crate::application::semantic::SemanticRetriever;
use crate::domain::error::DomainError;
use crate::domain::ports::language_model::{LanguageModel, ModelResponse};
use crate::domain::values::filter_selection::FilterSelection;
use crate::domain::values::retrieval_result::{CompletionResult, RetrievalResult};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Two-stage retrieval-augmented generation: one semantic search, then
/// a grounded completion. Content-filtered responses are transient, not
/// errors; they trigger a backed-off retry of the identical prompt up
/// to `max_attempts`, after which `ContentFilterExhausted` is terminal.
pub struct RagOrchestrator {
    retriever: SemanticRetriever,
    model: Arc<dyn LanguageModel>,
    max_attempts: usize,
    backoff: Duration,
}

impl RagOrchestrator {
    pub fn new(retriever: SemanticRetriever, model: Arc<dyn LanguageModel>) -> Self {
        Self::with_retry_policy(retriever, model, DEFAULT_MAX_ATTEMPTS, RETRY_BACKOFF)
    }

    pub fn with_retry_policy(
        retriever: SemanticRetriever,
        model: Arc<dyn LanguageModel>,
        max_attempts: usize,
        backoff: Duration,
    ) -> Self {
        Self {
            retriever,
            model,
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub async fn answer(
        &self,
        query_text: &str,
        selection: &FilterSelection,
    ) -> Result<CompletionResult, DomainError> {
        info!(query = query_text, "performing RAG query");
        // The grounding context is retrieved once; retries reuse it. An
        // empty context is still valid — the model can answer that the
        // reports are insufficient.
        let context = self.retriever.search(query_text, selection).await?;
        let prompt = grounding_prompt(&context)?;

        info!("sending retrieved reports to the LLM as grounding context");
        for attempt in 1..=self.max_attempts {
            match self.model.complete(&prompt, query_text, 0.0).await? {
                ModelResponse::Plain(text) => {
                    return Ok(CompletionResult::Grounded {
                        text: text.trim().to_string(),
                        context,
                    });
                }
                ModelResponse::Flagged { categories, .. } => {
                    warn!(attempt, ?categories, "response content-filtered, retrying");
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.backoff).await;
                    }
                }
            }
        }
        Err(DomainError::ContentFilterExhausted(self.max_attempts))
    }
}

fn grounding_prompt(context: &RetrievalResult) -> Result<String, DomainError> {
    let reports =
        serde_json::to_string(&context.reports).map_err(|e| DomainError::Parse(e.to_string()))?;
    let today = Utc::now().format("%A, %B %d, %Y");

    Ok(format!(
        "Intelligence Reports:\n\
         {reports}\n\n\
         Instructions:\n\
         Answer the user's question using the intelligence reports text above only.\n\
         Answer as if you are addressing a US intelligence analyst or Military officer.\n\
         Keep in mind today's date is {today}.\n\
         Keep your answer grounded in the facts of the intelligence reports.\n\
         Summarize the intelligence report's details field and respond using 20 words or less.\n\
         Do not include the number of words in your response."
    ))
}

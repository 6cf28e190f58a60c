use crate::domain::error::DomainError;
use crate::domain::ports::language_model::{LanguageModel, ModelResponse};
use std::sync::Arc;
use tracing::info;

const SYSTEM_PROMPT: &str = "\
Assistant is a large language model. \
Be succinct, answer in 15 words or less. \
If you don't know the answer, say that you don't know. \
Don't hallucinate. \
Don't ask follow up questions. \
Do not include the number of words in your response.";

/// Single-turn completion with no retrieved context. Temperature is
/// pinned to zero so identical calls reproduce for a fixed model
/// version. No retry here; only the RAG layer distinguishes
/// content-safety rejection from other failures.
pub struct CompletionEngine {
    model: Arc<dyn LanguageModel>,
}

impl CompletionEngine {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn complete(&self, query_text: &str) -> Result<String, DomainError> {
        info!(query = query_text, "performing LLM passthrough query");
        let text = match self.model.complete(SYSTEM_PROMPT, query_text, 0.0).await? {
            ModelResponse::Plain(text) => text,
            ModelResponse::Flagged { text, .. } => text,
        };
        Ok(text.trim().to_string())
    }
}

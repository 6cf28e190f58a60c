use crate::domain::error::DomainError;
use async_trait::async_trait;

/// A model response, tagged by content-safety outcome. Backends that do
/// not evaluate content safety always return `Plain`.
#[derive(Debug, Clone)]
pub enum ModelResponse {
    Plain(String),
    Flagged {
        text: String,
        /// Safety categories the backend marked as filtered.
        categories: Vec<String>,
    },
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        temperature: f32,
    ) -> Result<ModelResponse, DomainError>;
}

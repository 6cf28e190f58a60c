use crate::domain::error::DomainError;
use crate::domain::ports::language_model::{LanguageModel, ModelResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Where chat completions are served from. Azure routes per deployment
/// with an `api-key` header; OpenAI-compatible endpoints (including
/// self-hosted ones) take a bearer token and a model name in the body.
#[derive(Debug, Clone)]
pub enum ChatEndpoint {
    Azure {
        endpoint: String,
        deployment: String,
        api_version: String,
        api_key: String,
    },
    OpenAiCompatible {
        base_url: String,
        api_key: String,
        model: String,
    },
}

pub struct ChatModel {
    client: Client,
    endpoint: ChatEndpoint,
}

#[derive(Serialize)]
struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
    #[serde(default)]
    content_filter_results: Option<HashMap<String, FilterVerdict>>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct FilterVerdict {
    #[serde(default)]
    filtered: bool,
}

impl ChatModel {
    pub fn new(endpoint: ChatEndpoint) -> Self {
        Self {
            client: Client::builder()
                .user_agent("intelrag/0.1")
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            endpoint,
        }
    }

    fn request_parts(&self) -> (String, Option<String>) {
        match &self.endpoint {
            ChatEndpoint::Azure {
                endpoint,
                deployment,
                api_version,
                ..
            } => (
                format!(
                    "{}/openai/deployments/{}/chat/completions?api-version={}",
                    endpoint.trim_end_matches('/'),
                    deployment,
                    api_version
                ),
                None,
            ),
            ChatEndpoint::OpenAiCompatible {
                base_url, model, ..
            } => (
                format!("{}/chat/completions", base_url.trim_end_matches('/')),
                Some(model.clone()),
            ),
        }
    }
}

#[async_trait]
impl LanguageModel for ChatModel {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        temperature: f32,
    ) -> Result<ModelResponse, DomainError> {
        let (url, model) = self.request_parts();
        let body = ChatRequest {
            model,
            temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_message.to_string(),
                },
            ],
        };

        let mut req = self.client.post(&url).json(&body);
        req = match &self.endpoint {
            ChatEndpoint::Azure { api_key, .. } => req.header("api-key", api_key),
            ChatEndpoint::OpenAiCompatible { api_key, .. } => req.bearer_auth(api_key),
        };

        let resp = req
            .send()
            .await
            .map_err(|e| DomainError::Completion(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(DomainError::Completion(format!(
                "chat completion returned {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Completion("response carried no choices".into()))?;
        let text = choice.message.content.unwrap_or_default();

        match choice.content_filter_results {
            Some(results) => {
                let categories: Vec<String> = results
                    .into_iter()
                    .filter(|(_, v)| v.filtered)
                    .map(|(category, _)| category)
                    .collect();
                if categories.is_empty() {
                    Ok(ModelResponse::Plain(text))
                } else {
                    Ok(ModelResponse::Flagged { text, categories })
                }
            }
            // Backend does not evaluate content safety.
            None => Ok(ModelResponse::Plain(text)),
        }
    }
}

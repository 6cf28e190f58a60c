use crate::application::rag::DEFAULT_MAX_ATTEMPTS;
use crate::domain::error::DomainError;
use serde::Deserialize;
use std::path::Path;

/// Demo configuration, loaded from a TOML file. Credentials live here
/// rather than in query-time code.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub elastic: ElasticSettings,
    pub llm: LlmSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElasticSettings {
    pub url: String,
    #[serde(default = "default_index")]
    pub index: String,
    /// API key auth; takes precedence over basic auth when both are set.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_model_id")]
    pub model_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum LlmSettings {
    Azure {
        endpoint: String,
        deployment: String,
        api_version: String,
        api_key: String,
    },
    #[serde(rename = "openai")]
    OpenAiCompatible {
        base_url: String,
        api_key: String,
        model: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub num_reports: usize,
    pub rag_max_attempts: usize,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            num_reports: 100,
            rag_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

fn default_index() -> String {
    "intel-demo".to_string()
}

fn default_model_id() -> String {
    ".elser_model_2".to_string()
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw).map_err(|e| DomainError::Config(e.to_string()))
    }
}

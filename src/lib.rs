pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::completion::CompletionEngine;
use crate::application::generate::SetupUseCase;
use crate::application::lexical::LexicalRetriever;
use crate::application::rag::RagOrchestrator;
use crate::application::router::{RetrievalRouter, RouteOutcome};
use crate::application::semantic::SemanticRetriever;
use crate::config::{LlmSettings, Settings};
use crate::domain::error::DomainError;
use crate::domain::ports::bulk_loader::{BulkLoader, IngestOutcome};
use crate::domain::ports::index_admin::IndexAdmin;
use crate::domain::ports::language_model::LanguageModel;
use crate::domain::ports::search_backend::SearchBackend;
use crate::domain::values::filter_selection::FilterSelection;
use crate::infrastructure::elastic::admin::ElasticIndexAdmin;
use crate::infrastructure::elastic::bulk::ElasticBulkLoader;
use crate::infrastructure::elastic::client::ElasticBackend;
use crate::infrastructure::elastic::ElasticAuth;
use crate::infrastructure::openai::chat::{ChatEndpoint, ChatModel};
use std::sync::Arc;
use std::time::Duration;

pub struct IntelRag {
    router: RetrievalRouter,
    setup_uc: SetupUseCase,
    num_reports: usize,
}

impl IntelRag {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        let auth = elastic_auth(settings)?;
        let es = &settings.elastic;

        let backend: Arc<dyn SearchBackend> = Arc::new(ElasticBackend::new(
            es.url.clone(),
            es.index.clone(),
            auth.clone(),
            es.model_id.clone(),
        ));
        let admin: Arc<dyn IndexAdmin> = Arc::new(ElasticIndexAdmin::new(
            es.url.clone(),
            es.index.clone(),
            auth.clone(),
            es.model_id.clone(),
        ));
        let loader: Arc<dyn BulkLoader> = Arc::new(ElasticBulkLoader::new(
            es.url.clone(),
            es.index.clone(),
            auth,
        ));

        let endpoint = match &settings.llm {
            LlmSettings::Azure {
                endpoint,
                deployment,
                api_version,
                api_key,
            } => ChatEndpoint::Azure {
                endpoint: endpoint.clone(),
                deployment: deployment.clone(),
                api_version: api_version.clone(),
                api_key: api_key.clone(),
            },
            LlmSettings::OpenAiCompatible {
                base_url,
                api_key,
                model,
            } => ChatEndpoint::OpenAiCompatible {
                base_url: base_url.clone(),
                api_key: api_key.clone(),
                model: model.clone(),
            },
        };
        let model: Arc<dyn LanguageModel> = Arc::new(ChatModel::new(endpoint));

        let mut rag = Self::with_providers(
            backend,
            model,
            admin,
            loader,
            settings.demo.rag_max_attempts,
            Duration::from_secs(1),
        );
        rag.num_reports = settings.demo.num_reports;
        Ok(rag)
    }

    /// Construction over explicit collaborators; tests inject stubs here.
    pub fn with_providers(
        backend: Arc<dyn SearchBackend>,
        model: Arc<dyn LanguageModel>,
        admin: Arc<dyn IndexAdmin>,
        loader: Arc<dyn BulkLoader>,
        rag_max_attempts: usize,
        rag_backoff: Duration,
    ) -> Self {
        let router = RetrievalRouter::new(
            LexicalRetriever::new(backend.clone()),
            SemanticRetriever::new(backend.clone()),
            CompletionEngine::new(model.clone()),
            RagOrchestrator::with_retry_policy(
                SemanticRetriever::new(backend),
                model,
                rag_max_attempts,
                rag_backoff,
            ),
        );
        Self {
            router,
            setup_uc: SetupUseCase::new(admin, loader),
            num_reports: 100,
        }
    }

    pub async fn route(
        &self,
        query_text: &str,
        mode: &str,
        selection: &FilterSelection,
    ) -> Result<RouteOutcome, DomainError> {
        self.router.route(query_text, mode, selection).await
    }

    pub async fn setup(
        &self,
        num_reports: Option<usize>,
        reset: bool,
    ) -> Result<IngestOutcome, DomainError> {
        self.setup_uc
            .execute(num_reports.unwrap_or(self.num_reports), reset)
            .await
    }
}

fn elastic_auth(settings: &Settings) -> Result<ElasticAuth, DomainError> {
    let es = &settings.elastic;
    if let Some(key) = &es.api_key {
        return Ok(ElasticAuth::ApiKey(key.clone()));
    }
    if let (Some(user), Some(password)) = (&es.user, &es.password) {
        return Ok(ElasticAuth::Basic {
            user: user.clone(),
            password: password.clone(),
        });
    }
    Err(DomainError::Config(
        "elastic auth requires api_key or user/password".into(),
    ))
}

//! Shared test helpers: stub collaborators and report builders.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use intelrag::domain::entities::report::{Country, Details, Report};
use intelrag::domain::error::DomainError;
use intelrag::domain::ports::bulk_loader::{BulkLoader, IngestOutcome};
use intelrag::domain::ports::index_admin::IndexAdmin;
use intelrag::domain::ports::language_model::{LanguageModel, ModelResponse};
use intelrag::domain::ports::search_backend::{SearchBackend, SearchHit};
use intelrag::domain::values::search_request::SearchRequest;
use intelrag::IntelRag;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn make_report(id: &str, classification: &str) -> Report {
    Report {
        report_id: id.to_string(),
        date: Utc::now(),
        source: "HUMINT".into(),
        group: "Iron Jackal".into(),
        classification: classification.to_string(),
        country: Country {
            name: "Albania".into(),
            code: "AL".into(),
            coordinates: "41.1533,20.1683".into(),
        },
        compartments: vec!["COPPER KETTLE".into()],
        summary: "Leadership relocated.".into(),
        details: Details::Text("Leadership relocated. Source access is direct.".into()),
    }
}

pub fn make_hit(id: &str) -> SearchHit {
    SearchHit {
        report: make_report(id, "UNCLASSIFIED"),
        highlight: None,
    }
}

/// Canned-hit search backend that records every request and honors the
/// requested result size like a real backend would.
pub struct StubBackend {
    hits: Vec<SearchHit>,
    pub requests: Mutex<Vec<SearchRequest>>,
}

impl StubBackend {
    pub fn empty() -> Arc<Self> {
        Self::with_hits(vec![])
    }

    pub fn with_hits(hits: Vec<SearchHit>) -> Arc<Self> {
        Arc::new(Self {
            hits,
            requests: Mutex::new(vec![]),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> SearchRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl SearchBackend for StubBackend {
    async fn query(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.hits.iter().take(request.size).cloned().collect())
    }
}

/// Language model that replays a fixed script of responses and records
/// each call's prompts and temperature.
pub struct ScriptedModel {
    script: Mutex<VecDeque<ModelResponse>>,
    pub calls: Mutex<Vec<(String, String, f32)>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<ModelResponse>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(responses.into()),
            calls: Mutex::new(vec![]),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        temperature: f32,
    ) -> Result<ModelResponse, DomainError> {
        self.calls.lock().unwrap().push((
            system_prompt.to_string(),
            user_message.to_string(),
            temperature,
        ));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DomainError::Completion("script exhausted".into()))
    }
}

/// Admin/loader stubs sharing an event log so tests can assert the
/// setup path's call order.
#[derive(Default)]
pub struct EventLog(pub Mutex<Vec<String>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub struct RecordingAdmin {
    pub log: Arc<EventLog>,
}

#[async_trait]
impl IndexAdmin for RecordingAdmin {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        self.log.push("ensure_schema");
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        self.log.push("reset");
        Ok(())
    }

    async fn finalize_ingest(&self) -> Result<(), DomainError> {
        self.log.push("finalize_ingest");
        Ok(())
    }
}

pub struct RecordingLoader {
    pub log: Arc<EventLog>,
}

#[async_trait]
impl BulkLoader for RecordingLoader {
    async fn ingest(&self, reports: &[Report]) -> Result<IngestOutcome, DomainError> {
        self.log.push(format!("ingest:{}", reports.len()));
        Ok(IngestOutcome {
            success_count: reports.len(),
            first_error: None,
        })
    }
}

pub fn setup(backend: Arc<StubBackend>, model: Arc<ScriptedModel>) -> IntelRag {
    setup_with_attempts(backend, model, 10)
}

pub fn setup_with_attempts(
    backend: Arc<StubBackend>,
    model: Arc<ScriptedModel>,
    rag_max_attempts: usize,
) -> IntelRag {
    let log = Arc::new(EventLog::default());
    IntelRag::with_providers(
        backend,
        model,
        Arc::new(RecordingAdmin { log: log.clone() }),
        Arc::new(RecordingLoader { log }),
        rag_max_attempts,
        Duration::from_millis(1),
    )
}

use crate::domain::entities::report::Report;
use std::collections::HashMap;

/// Ranked reports from one retriever call plus, for lexical search,
/// a report_id → highlighted excerpt map. Read-only downstream.
#[derive(Debug, Clone, Default)]
pub struct RetrievalResult {
    pub reports: Vec<Report>,
    pub highlights: HashMap<String, String>,
}

impl RetrievalResult {
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn highlight_for(&self, report_id: &str) -> Option<&str> {
        self.highlights.get(report_id).map(String::as_str)
    }
}

/// Generated text, bare or paired with the grounding context that
/// informed it.
#[derive(Debug, Clone)]
pub enum CompletionResult {
    Plain(String),
    Grounded {
        text: String,
        context: RetrievalResult,
    },
}

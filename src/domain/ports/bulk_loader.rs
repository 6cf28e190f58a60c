use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Batch ingest outcome: how many documents landed, and the first
/// per-document failure for user-facing display.
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub success_count: usize,
    pub first_error: Option<String>,
}

/// Streams documents to the backend in fixed-size batches. A failed
/// batch must not abort the remaining ones.
#[async_trait]
pub trait BulkLoader: Send + Sync {
    async fn ingest(&self, reports: &[Report]) -> Result<IngestOutcome, DomainError>;
}

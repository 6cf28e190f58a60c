use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Idempotent index/pipeline provisioning. Invoked only by the data
/// setup path, never at query time.
#[async_trait]
pub trait IndexAdmin: Send + Sync {
    /// Create the index mapping and inference pipeline if absent.
    async fn ensure_schema(&self) -> Result<(), DomainError>;
    /// Drop the index entirely.
    async fn reset(&self) -> Result<(), DomainError>;
    /// Restore steady-state index settings after a bulk load.
    async fn finalize_ingest(&self) -> Result<(), DomainError>;
}

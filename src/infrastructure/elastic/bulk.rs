use super::{apply_auth, http_client, ElasticAuth};
use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::bulk_loader::{BulkLoader, IngestOutcome};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

const CHUNK_SIZE: usize = 10;

/// `_bulk` NDJSON ingestion in fixed-size batches. A failed batch is
/// recorded and the remaining batches still run.
pub struct ElasticBulkLoader {
    client: Client,
    base_url: String,
    index: String,
    auth: ElasticAuth,
}

impl ElasticBulkLoader {
    pub fn new(base_url: String, index: String, auth: ElasticAuth) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index,
            auth,
        }
    }

    fn render_chunk(&self, reports: &[Report]) -> Result<String, DomainError> {
        let mut body = String::new();
        for report in reports {
            let action = serde_json::json!({
                "index": { "_index": self.index, "_id": report.report_id }
            });
            body.push_str(&action.to_string());
            body.push('\n');
            body.push_str(
                &serde_json::to_string(report).map_err(|e| DomainError::Parse(e.to_string()))?,
            );
            body.push('\n');
        }
        Ok(body)
    }
}

#[derive(Deserialize)]
struct BulkResponse {
    errors: bool,
    items: Vec<BulkItem>,
}

#[derive(Deserialize)]
struct BulkItem {
    index: BulkItemStatus,
}

#[derive(Deserialize)]
struct BulkItemStatus {
    status: u16,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[async_trait]
impl BulkLoader for ElasticBulkLoader {
    async fn ingest(&self, reports: &[Report]) -> Result<IngestOutcome, DomainError> {
        info!(count = reports.len(), "sending docs to the search backend");
        let url = format!("{}/_bulk", self.base_url);
        let mut outcome = IngestOutcome::default();

        for chunk in reports.chunks(CHUNK_SIZE) {
            let body = self.render_chunk(chunk)?;
            let resp = apply_auth(self.client.post(&url), &self.auth)
                .header("Content-Type", "application/x-ndjson")
                .body(body)
                .send()
                .await;

            let resp = match resp {
                Ok(r) => r,
                Err(e) => {
                    error!(error = %e, "bulk batch failed");
                    outcome
                        .first_error
                        .get_or_insert_with(|| format!("bulk request failed: {e}"));
                    continue;
                }
            };

            if !resp.status().is_success() {
                let status = resp.status();
                let detail = resp.text().await.unwrap_or_default();
                error!(%status, "bulk batch rejected");
                outcome
                    .first_error
                    .get_or_insert_with(|| format!("bulk returned {status}: {detail}"));
                continue;
            }

            let parsed: BulkResponse = match resp.json().await {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!(error = %e, "bulk response body unreadable");
                    outcome
                        .first_error
                        .get_or_insert_with(|| format!("bulk response parse failed: {e}"));
                    continue;
                }
            };
            record_items(&mut outcome, parsed);
        }

        Ok(outcome)
    }
}

fn record_items(outcome: &mut IngestOutcome, parsed: BulkResponse) {
    for item in parsed.items {
        if (200..300).contains(&item.index.status) {
            outcome.success_count += 1;
        } else if let Some(err) = item.index.error {
            outcome.first_error.get_or_insert_with(|| err.to_string());
        }
    }
    if parsed.errors {
        error!("one or more documents in the batch failed to index");
    }
}

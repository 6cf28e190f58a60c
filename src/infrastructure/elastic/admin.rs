use super::{apply_auth, http_client, ElasticAuth, INGEST_PIPELINE};
use crate::domain::error::DomainError;
use crate::domain::ports::index_admin::IndexAdmin;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::info;

/// Index/pipeline provisioning for the demo corpus. All operations are
/// idempotent; `ensure_schema` is a no-op when the index exists.
pub struct ElasticIndexAdmin {
    client: Client,
    base_url: String,
    index: String,
    auth: ElasticAuth,
    /// Inference model the ingest pipeline runs over `details`.
    model_id: String,
}

impl ElasticIndexAdmin {
    pub fn new(base_url: String, index: String, auth: ElasticAuth, model_id: String) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index,
            auth,
            model_id,
        }
    }

    async fn index_exists(&self) -> Result<bool, DomainError> {
        let url = format!("{}/{}", self.base_url, self.index);
        let resp = apply_auth(self.client.head(&url), &self.auth)
            .send()
            .await
            .map_err(|e| DomainError::BackendQuery(e.to_string()))?;
        Ok(resp.status().is_success())
    }

    async fn put_json(&self, url: &str, body: serde_json::Value) -> Result<(), DomainError> {
        let resp = apply_auth(self.client.put(url), &self.auth)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::BackendQuery(e.to_string()))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(DomainError::BackendQuery(format!(
                "{url} returned {status}: {detail}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl IndexAdmin for ElasticIndexAdmin {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        if !self.index_exists().await? {
            info!(index = %self.index, "creating index");
            let url = format!("{}/{}", self.base_url, self.index);
            // The embeddings field is backend-derived and excluded from
            // _source so query-time code never sees it.
            self.put_json(
                &url,
                json!({
                    "mappings": {
                        "_source": { "excludes": ["details_embeddings"] },
                        "properties": {
                            "classification": { "type": "keyword" },
                            "compartments": { "type": "keyword" },
                            "date": { "type": "date" },
                            "details": { "type": "text" },
                            "details_embeddings": { "type": "sparse_vector" },
                            "report_id": { "type": "keyword" },
                            "source": { "type": "keyword" },
                            "group": { "type": "keyword" },
                            "summary": { "type": "text" },
                            "country.name": { "type": "keyword" },
                            "country.coordinates": { "type": "geo_point" },
                            "country.code": { "type": "keyword" },
                        }
                    },
                    "settings": {
                        "index": {
                            "number_of_shards": "2",
                            "number_of_replicas": "0",
                            "refresh_interval": "-1",
                            "default_pipeline": INGEST_PIPELINE,
                        }
                    }
                }),
            )
            .await?;
        }

        info!("creating/updating ingest pipeline");
        let url = format!("{}/_ingest/pipeline/{}", self.base_url, INGEST_PIPELINE);
        self.put_json(
            &url,
            json!({
                "processors": [
                    {
                        "inference": {
                            "model_id": self.model_id,
                            "input_output": [
                                {
                                    "input_field": "details",
                                    "output_field": "details_embeddings",
                                }
                            ]
                        }
                    }
                ]
            }),
        )
        .await
    }

    async fn reset(&self) -> Result<(), DomainError> {
        let url = format!("{}/{}", self.base_url, self.index);
        info!(index = %self.index, "deleting existing index");
        let resp = apply_auth(self.client.delete(&url), &self.auth)
            .send()
            .await
            .map_err(|e| DomainError::BackendQuery(e.to_string()))?;
        // Missing index is fine; reset is idempotent.
        if !resp.status().is_success() && resp.status() != StatusCode::NOT_FOUND {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(DomainError::BackendQuery(format!(
                "index delete returned {status}: {detail}"
            )));
        }
        Ok(())
    }

    async fn finalize_ingest(&self) -> Result<(), DomainError> {
        let url = format!("{}/{}/_settings", self.base_url, self.index);
        self.put_json(
            &url,
            json!({
                "index": {
                    "number_of_replicas": "1",
                    "refresh_interval": "1s",
                }
            }),
        )
        .await
    }
}

pub mod admin;
pub mod bulk;
pub mod client;

use std::time::Duration;

/// Name of the inference pipeline that computes sparse-vector
/// embeddings for the details field at ingest time.
pub const INGEST_PIPELINE: &str = "intel-demo";

/// Credentials for the search cluster.
#[derive(Debug, Clone)]
pub enum ElasticAuth {
    ApiKey(String),
    Basic { user: String, password: String },
    None,
}

pub(crate) fn apply_auth(
    req: reqwest::RequestBuilder,
    auth: &ElasticAuth,
) -> reqwest::RequestBuilder {
    match auth {
        ElasticAuth::ApiKey(key) => req.header("Authorization", format!("ApiKey {key}")),
        ElasticAuth::Basic { user, password } => req.basic_auth(user, Some(password)),
        ElasticAuth::None => req,
    }
}

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("intelrag/0.1")
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_default()
}

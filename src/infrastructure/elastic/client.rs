use super::{apply_auth, http_client, ElasticAuth};
use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::search_backend::{SearchBackend, SearchHit};
use crate::domain::values::filter_expression::{DateFloor, FilterExpression};
use crate::domain::values::search_request::{MatchClause, SearchRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Elasticsearch `_search` adapter. Renders the backend-neutral request
/// into the bool/query_string/text_expansion DSL and parses `_source`
/// hits back into reports.
pub struct ElasticBackend {
    client: Client,
    base_url: String,
    index: String,
    auth: ElasticAuth,
    /// Inference model used for query-side term expansion.
    model_id: String,
}

impl ElasticBackend {
    pub fn new(base_url: String, index: String, auth: ElasticAuth, model_id: String) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index,
            auth,
            model_id,
        }
    }

    fn render_body(&self, request: &SearchRequest) -> Value {
        let must = match &request.clause {
            MatchClause::FullText { field, query } => json!({
                "query_string": {
                    "default_field": field,
                    "query": query,
                }
            }),
            MatchClause::SparseVector { field, query } => json!({
                "text_expansion": {
                    field.as_str(): {
                        "model_id": self.model_id,
                        "model_text": query,
                    }
                }
            }),
        };

        let mut body = json!({
            "size": request.size,
            "query": {
                "bool": {
                    "filter": render_filter(&request.filter),
                    "must": [must],
                }
            }
        });

        if let Some(spec) = &request.highlight {
            body["highlight"] = json!({
                "pre_tags": [spec.pre_tag],
                "post_tags": [spec.post_tag],
                "fields": { spec.field.as_str(): { "fragment_size": spec.fragment_size } },
            });
        }
        body
    }
}

fn render_filter(filter: &FilterExpression) -> Vec<Value> {
    let mut clauses = Vec::new();
    if let Some(floor) = &filter.date_floor {
        let gte = match floor {
            DateFloor::YearsAgo(n) => format!("now-{n}y"),
            DateFloor::DaysAgo(n) => format!("now-{n}d"),
            DateFloor::CalendarDate(d) => d.clone(),
        };
        clauses.push(json!({ "range": { "date": { "gte": gte } } }));
    }
    for terms in &filter.clauses {
        clauses.push(json!({ "terms": { terms.field.as_str(): terms.values } }));
    }
    clauses
}

#[derive(Deserialize)]
struct EsResponse {
    hits: EsHitsEnvelope,
}

#[derive(Deserialize)]
struct EsHitsEnvelope {
    hits: Vec<EsHit>,
}

#[derive(Deserialize)]
struct EsHit {
    #[serde(rename = "_source")]
    source: Report,
    #[serde(default)]
    highlight: Option<HashMap<String, Vec<String>>>,
}

#[async_trait]
impl SearchBackend for ElasticBackend {
    async fn query(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, DomainError> {
        let url = format!("{}/{}/_search", self.base_url, self.index);
        let body = self.render_body(request);

        let resp = apply_auth(self.client.post(&url), &self.auth)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::BackendQuery(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(DomainError::BackendQuery(format!(
                "search returned {status}: {detail}"
            )));
        }

        let parsed: EsResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        let highlight_field = request.highlight.as_ref().map(|h| h.field.clone());
        let hits = parsed
            .hits
            .hits
            .into_iter()
            .map(|hit| {
                let highlight = match (&highlight_field, hit.highlight) {
                    (Some(field), Some(mut fragments)) => fragments
                        .remove(field)
                        .and_then(|mut f| (!f.is_empty()).then(|| f.remove(0))),
                    _ => None,
                };
                SearchHit {
                    report: hit.source,
                    highlight,
                }
            })
            .collect();
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::filter_expression::TermsClause;
    use crate::domain::values::search_request::HighlightSpec;

    fn backend() -> ElasticBackend {
        ElasticBackend::new(
            "http://localhost:9200".into(),
            "intel-demo".into(),
            ElasticAuth::None,
            ".elser_model_2".into(),
        )
    }

    fn lexical_request() -> SearchRequest {
        SearchRequest {
            clause: MatchClause::FullText {
                field: "details".into(),
                query: "weapons shipment".into(),
            },
            filter: FilterExpression {
                date_floor: Some(DateFloor::DaysAgo(30)),
                clauses: vec![TermsClause::new(
                    "classification",
                    vec!["SUPER SECRET".into()],
                )],
            },
            size: 3,
            highlight: Some(HighlightSpec {
                field: "details".into(),
                pre_tag: "**:violet-background[".into(),
                post_tag: "]**".into(),
                fragment_size: 1000,
            }),
        }
    }

    #[test]
    fn test_lexical_body_shape() {
        let body = backend().render_body(&lexical_request());
        assert_eq!(body["size"], 3);
        assert_eq!(
            body["query"]["bool"]["must"][0]["query_string"]["query"],
            "weapons shipment"
        );
        assert_eq!(
            body["query"]["bool"]["filter"][0]["range"]["date"]["gte"],
            "now-30d"
        );
        assert_eq!(
            body["query"]["bool"]["filter"][1]["terms"]["classification"][0],
            "SUPER SECRET"
        );
        assert_eq!(body["highlight"]["pre_tags"][0], "**:violet-background[");
        assert_eq!(
            body["highlight"]["fields"]["details"]["fragment_size"],
            1000
        );
    }

    #[test]
    fn test_sparse_vector_body_carries_model_id() {
        let request = SearchRequest {
            clause: MatchClause::SparseVector {
                field: "details_embeddings".into(),
                query: "border activity".into(),
            },
            filter: FilterExpression::default(),
            size: 3,
            highlight: None,
        };
        let body = backend().render_body(&request);
        let expansion = &body["query"]["bool"]["must"][0]["text_expansion"]["details_embeddings"];
        assert_eq!(expansion["model_id"], ".elser_model_2");
        assert_eq!(expansion["model_text"], "border activity");
        assert!(body.get("highlight").is_none());
    }

    #[test]
    fn test_empty_filter_renders_no_clauses() {
        let clauses = render_filter(&FilterExpression::default());
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_calendar_date_floor() {
        let filter = FilterExpression {
            date_floor: Some(DateFloor::CalendarDate("2024-01-01".into())),
            clauses: vec![],
        };
        let clauses = render_filter(&filter);
        assert_eq!(clauses[0]["range"]["date"]["gte"], "2024-01-01");
    }
}

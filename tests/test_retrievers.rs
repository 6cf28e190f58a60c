mod common;

use common::*;
use intelrag::application::lexical::LexicalRetriever;
use intelrag::application::semantic::SemanticRetriever;
use intelrag::domain::values::date_range::DateRange;
use intelrag::domain::values::filter_selection::FilterSelection;
use intelrag::domain::values::search_request::MatchClause;
use intelrag::domain::ports::search_backend::SearchHit;

#[tokio::test]
async fn test_lexical_request_shape() {
    let backend = StubBackend::empty();
    let retriever = LexicalRetriever::new(backend.clone());

    let selection = FilterSelection::new(
        DateRange::Last30Days,
        vec!["SUPER SECRET".into()],
        vec![],
        vec![],
        vec![],
    );
    retriever.search("weapons shipment", &selection).await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.size, 3);
    assert_eq!(
        request.clause,
        MatchClause::FullText {
            field: "details".into(),
            query: "weapons shipment".into(),
        }
    );
    let highlight = request.highlight.unwrap();
    assert_eq!(highlight.pre_tag, "**:violet-background[");
    assert_eq!(highlight.post_tag, "]**");
    assert_eq!(highlight.fragment_size, 1000);
    assert_eq!(request.filter.clauses[0].field, "classification");
}

#[tokio::test]
async fn test_semantic_request_shape() {
    let backend = StubBackend::empty();
    let retriever = SemanticRetriever::new(backend.clone());

    retriever
        .search("border activity", &FilterSelection::all_time())
        .await
        .unwrap();

    let request = backend.last_request();
    assert_eq!(request.size, 3);
    assert!(request.highlight.is_none());
    assert_eq!(
        request.clause,
        MatchClause::SparseVector {
            field: "details_embeddings".into(),
            query: "border activity".into(),
        }
    );
}

#[tokio::test]
async fn test_result_bounded_by_page_size() {
    let hits: Vec<SearchHit> = (0..10)
        .map(|i| make_hit(&format!("INT-2024-{:03}", i + 1)))
        .collect();
    let backend = StubBackend::with_hits(hits);

    let lexical = LexicalRetriever::new(backend.clone());
    let result = lexical
        .search("anything", &FilterSelection::all_time())
        .await
        .unwrap();
    assert_eq!(result.reports.len(), 3);

    let semantic = SemanticRetriever::new(backend);
    let result = semantic
        .search("anything", &FilterSelection::all_time())
        .await
        .unwrap();
    assert_eq!(result.reports.len(), 3);
}

#[tokio::test]
async fn test_lexical_collects_highlights_by_report_id() {
    let mut hit = make_hit("INT-2024-001");
    hit.highlight = Some("Leadership **:violet-background[relocated]**.".into());
    let backend = StubBackend::with_hits(vec![hit, make_hit("INT-2024-002")]);

    let retriever = LexicalRetriever::new(backend);
    let result = retriever
        .search("relocated", &FilterSelection::all_time())
        .await
        .unwrap();

    assert_eq!(result.reports.len(), 2);
    assert_eq!(
        result.highlight_for("INT-2024-001"),
        Some("Leadership **:violet-background[relocated]**.")
    );
    assert_eq!(result.highlight_for("INT-2024-002"), None);
}

#[tokio::test]
async fn test_empty_hits_are_success_not_error() {
    let backend = StubBackend::empty();
    let retriever = SemanticRetriever::new(backend);
    let result = retriever
        .search("nothing matches", &FilterSelection::all_time())
        .await
        .unwrap();
    assert!(result.is_empty());
}

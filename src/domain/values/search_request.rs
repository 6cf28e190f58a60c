use crate::domain::values::filter_expression::FilterExpression;

/// A ranked query as the retrievers describe it; the backend adapter
/// owns the translation into its native query DSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub clause: MatchClause,
    pub filter: FilterExpression,
    pub size: usize,
    pub highlight: Option<HighlightSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchClause {
    /// Keyword / full-text match against a document field.
    FullText { field: String, query: String },
    /// Learned-term-expansion similarity against a precomputed
    /// sparse-vector field; the backend expands `query` itself.
    SparseVector { field: String, query: String },
}

/// Span highlighting request for the matched field. Markers are chosen
/// by the caller so the presentation layer can render emphasis without
/// re-implementing matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpec {
    pub field: String,
    pub pre_tag: String,
    pub post_tag: String,
    pub fragment_size: usize,
}

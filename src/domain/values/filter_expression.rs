/// Backend-neutral query constraint: a conjunction of at most one date
/// lower bound and zero or more per-dimension disjunctions. Built fresh
/// per query, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression {
    pub date_floor: Option<DateFloor>,
    pub clauses: Vec<TermsClause>,
}

/// Inclusive lower bound on the report date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFloor {
    /// Relative bound, "now minus N years". A large N is the no-op bound.
    YearsAgo(u32),
    /// Relative bound, "now minus N days".
    DaysAgo(u32),
    /// Absolute calendar date, `YYYY-MM-DD`.
    CalendarDate(String),
}

/// "field value is one of these" — OR semantics over the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsClause {
    pub field: String,
    pub values: Vec<String>,
}

impl TermsClause {
    pub fn new(field: &str, values: Vec<String>) -> Self {
        Self {
            field: field.to_string(),
            values,
        }
    }
}

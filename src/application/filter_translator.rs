use crate::domain::values::date_range::DateRange;
use crate::domain::values::filter_expression::{DateFloor, FilterExpression, TermsClause};
use crate::domain::values::filter_selection::FilterSelection;

/// Fixed calendar-year start for the ThisYear range. The demo corpus is
/// dated relative to this year, so the bound is a constant rather than a
/// wall-clock derivation.
pub const THIS_YEAR_START: &str = "2024-01-01";

/// Far enough in the past to match every document.
const ALL_TIME_YEARS: u32 = 1000;

/// Translate UI filter choices into the backend-neutral constraint tree.
/// Pure function of its input. An empty selection set on a dimension
/// produces no clause for that dimension; emitting a clause there would
/// match zero documents instead of all of them.
pub fn translate(selection: &FilterSelection) -> FilterExpression {
    let date_floor = match selection.date_range {
        DateRange::AllTime => Some(DateFloor::YearsAgo(ALL_TIME_YEARS)),
        DateRange::Last30Days => Some(DateFloor::DaysAgo(30)),
        DateRange::ThisYear => Some(DateFloor::CalendarDate(THIS_YEAR_START.to_string())),
    };

    let mut clauses = Vec::new();
    push_terms(&mut clauses, "classification", &selection.classifications);
    push_terms(&mut clauses, "source", &selection.sources);
    push_terms(&mut clauses, "country.name", &selection.countries);
    push_terms(&mut clauses, "compartments", &selection.compartments);

    FilterExpression { date_floor, clauses }
}

fn push_terms(
    clauses: &mut Vec<TermsClause>,
    field: &str,
    values: &std::collections::BTreeSet<String>,
) {
    if !values.is_empty() {
        clauses.push(TermsClause::new(field, values.iter().cloned().collect()));
    }
}

use crate::domain::values::date_range::DateRange;
use std::collections::BTreeSet;

/// UI multiselect sentinel meaning "no constraint on this dimension".
/// Normalized away at construction so the translator only ever sees
/// the empty-set convention.
const SELECT_ALL: &str = "ALL";

/// One user query's worth of filter choices. An empty set on any
/// dimension means "no constraint", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub date_range: DateRange,
    pub classifications: BTreeSet<String>,
    pub sources: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub compartments: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(
        date_range: DateRange,
        classifications: Vec<String>,
        sources: Vec<String>,
        countries: Vec<String>,
        compartments: Vec<String>,
    ) -> Self {
        Self {
            date_range,
            classifications: normalize(classifications),
            sources: normalize(sources),
            countries: normalize(countries),
            compartments: normalize(compartments),
        }
    }

    pub fn all_time() -> Self {
        Self::default()
    }
}

fn normalize(values: Vec<String>) -> BTreeSet<String> {
    if values.iter().any(|v| v == SELECT_ALL) {
        return BTreeSet::new();
    }
    values.into_iter().collect()
}

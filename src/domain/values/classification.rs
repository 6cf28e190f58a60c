/// Ordering of classification markings, lowest to highest.
pub const LEVELS: [&str; 4] = [
    "UNCLASSIFIED",
    "HUSH HUSH",
    "SUPER SECRET",
    "ULTRA SUPER SECRET",
];

/// Numeric rank of a marking; unknown markings rank lowest.
pub fn level(classification: &str) -> usize {
    LEVELS
        .iter()
        .position(|l| *l == classification)
        .unwrap_or(0)
}

/// Highest marking among the given ones, if any.
pub fn highest<'a, I>(classifications: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    classifications.into_iter().max_by_key(|c| level(c))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single synthetic intelligence record, persisted by the search backend
/// and addressed by `report_id`. Immutable after ingest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_id: String,
    pub date: DateTime<Utc>,
    pub source: String,
    pub group: String,
    pub classification: String,
    pub country: Country,
    pub compartments: Vec<String>,
    pub summary: String,
    pub details: Details,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
    /// "lat,lon" geo point string, backend-side only.
    pub coordinates: String,
}

/// Details body. Hand-authored event documents store a list here,
/// generated reports a scalar; rendering uses the first element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Details {
    Text(String),
    Texts(Vec<String>),
}

impl Details {
    pub fn primary(&self) -> &str {
        match self {
            Details::Text(s) => s,
            Details::Texts(v) => v.first().map(String::as_str).unwrap_or(""),
        }
    }
}

impl Report {
    /// First sentence of the details text, or the whole text when no
    /// sentence boundary exists.
    pub fn derive_summary(details: &str) -> String {
        match details.split_once(". ") {
            Some((first, _)) => format!("{first}."),
            None => details.to_string(),
        }
    }
}

use crate::domain::entities::report::{Country, Details, Report};
use crate::domain::error::DomainError;
use crate::domain::ports::bulk_loader::{BulkLoader, IngestOutcome};
use crate::domain::ports::index_admin::IndexAdmin;
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

const COUNTRIES: [(&str, &str, &str); 8] = [
    ("Afghanistan", "AF", "33.9391,67.7100"),
    ("Albania", "AL", "41.1533,20.1683"),
    ("Algeria", "DZ", "28.0339,1.6596"),
    ("Andorra", "AD", "42.5462,1.6016"),
    ("Angola", "AO", "-11.2027,17.8739"),
    ("Argentina", "AR", "-38.4161,-63.6167"),
    ("Armenia", "AM", "40.0691,45.0382"),
    ("Azerbaijan", "AZ", "40.1431,47.5769"),
];

const GROUPS: [&str; 6] = [
    "Crimson Sparrow",
    "Iron Jackal",
    "Shadow Syndicate",
    "Silent Viper",
    "Red Meridian",
    "Hollow Lantern",
];

const SOURCES: [&str; 4] = ["GEOINT", "HUMINT", "SIGINT", "MASINT"];

const CLASSIFICATIONS: [&str; 4] = [
    "UNCLASSIFIED",
    "HUSH HUSH",
    "SUPER SECRET",
    "ULTRA SUPER SECRET",
];

const COMPARTMENTS: [&str; 6] = [
    "COPPER KETTLE",
    "VELVET HAMMER",
    "PAPER TIGER",
    "NIGHT HERON",
    "TIN WHISTLE",
    "GLASS ORCHID",
];

/// Report bodies; `{country}`, `{group}` and `{selector}` are filled in
/// per report. First sentence doubles as the summary.
const DETAILS_TEMPLATES: [&str; 5] = [
    "Intercepted communications indicate operatives of {group} intend to convene in {country} within the next two weeks. The meeting site is referenced only by selector {selector}. Analysts assess the gathering concerns logistics coordination for a follow-on operation.",
    "Overhead imagery of {country} shows new construction consistent with a staging facility attributed to {group}. Activity at the site is tracked under selector {selector}. Throughput suggests the facility is not yet operational.",
    "A source with direct access reports that {group} leadership has relocated to {country}. The safehouse is catalogued under selector {selector}. The source has previously provided reliable reporting on the group's movements.",
    "Signals collection places a known {group} facilitator inside {country} coordinating procurement of dual-use equipment. Associated traffic is tagged with selector {selector}. The equipment list matches prior acquisition patterns.",
    "Financial intelligence links front companies in {country} to the funding network of {group}. Transaction threads are grouped under selector {selector}. Volumes have increased threefold over the reporting period.",
];

/// Generates synthetic intelligence reports over the fixed vocabularies.
pub struct ReportFactory;

impl ReportFactory {
    pub fn create(i: usize) -> Report {
        Self::create_with_rng(i, &mut rand::thread_rng())
    }

    pub fn create_with_rng<R: Rng + ?Sized>(i: usize, rng: &mut R) -> Report {
        let (name, code, coordinates) = *COUNTRIES.choose(rng).unwrap_or(&COUNTRIES[0]);
        let group = GROUPS.choose(rng).unwrap_or(&GROUPS[0]);
        let template = DETAILS_TEMPLATES.choose(rng).unwrap_or(&DETAILS_TEMPLATES[0]);

        let details = template
            .replace("{country}", name)
            .replace("{group}", group)
            .replace("{selector}", &uuid::Uuid::new_v4().to_string());
        let summary = Report::derive_summary(&details);

        let compartment_count = rng.gen_range(1..=4);
        let compartments: Vec<String> = COMPARTMENTS
            .choose_multiple(rng, compartment_count)
            .map(|c| c.to_string())
            .collect();

        let backdate = Duration::days(rng.gen_range(0..365))
            + Duration::hours(rng.gen_range(0..24))
            + Duration::minutes(rng.gen_range(0..60))
            + Duration::seconds(rng.gen_range(0..60));

        Report {
            report_id: format!("INT-2024-{:03}", i + 1),
            date: Utc::now() - backdate,
            source: SOURCES.choose(rng).unwrap_or(&SOURCES[0]).to_string(),
            group: group.to_string(),
            classification: CLASSIFICATIONS
                .choose(rng)
                .unwrap_or(&CLASSIFICATIONS[0])
                .to_string(),
            country: Country {
                name: name.to_string(),
                code: code.to_string(),
                coordinates: coordinates.to_string(),
            },
            compartments,
            summary,
            details: Details::Text(details),
        }
    }
}

/// Data-setup path: generate, provision, bulk-ingest, restore index
/// settings. Never touched by query-time code.
pub struct SetupUseCase {
    admin: Arc<dyn IndexAdmin>,
    loader: Arc<dyn BulkLoader>,
}

impl SetupUseCase {
    pub fn new(admin: Arc<dyn IndexAdmin>, loader: Arc<dyn BulkLoader>) -> Self {
        Self { admin, loader }
    }

    pub async fn execute(
        &self,
        num_reports: usize,
        reset: bool,
    ) -> Result<IngestOutcome, DomainError> {
        info!(num_reports, "creating synthetic intel reports");
        let reports: Vec<Report> = (0..num_reports).map(ReportFactory::create).collect();

        if reset {
            self.admin.reset().await?;
        }
        self.admin.ensure_schema().await?;

        let outcome = self.loader.ingest(&reports).await?;
        self.admin.finalize_ingest().await?;
        Ok(outcome)
    }
}

use crate::application::router::RouteOutcome;
use crate::domain::values::classification;
use std::fmt::Write;

/// Presentation boundary: turn a routed outcome into display text.
/// Emphasis markers inside highlighted excerpts pass through untouched.
pub fn render(outcome: &RouteOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", outcome.display);

    let results = match &outcome.results {
        Some(results) if !results.is_empty() => results,
        _ => return out,
    };

    if let Some(highest) =
        classification::highest(results.reports.iter().map(|r| r.classification.as_str()))
    {
        let _ = writeln!(
            out,
            "\nHighest classification of returned results: {highest}"
        );
    }

    for report in &results.reports {
        let teaser: String = report.summary.chars().take(65).collect();
        let _ = writeln!(
            out,
            "\nIntelligence Report ID {} - {teaser}...",
            report.report_id
        );
        let _ = writeln!(out, "  Classification: {}", report.classification);
        let _ = writeln!(out, "  Compartments: {}", report.compartments.join(", "));
        let _ = writeln!(
            out,
            "  Report Date: {}",
            report.date.format("%A, %B %d, %Y")
        );
        let _ = writeln!(out, "  Summary: {}", report.summary);
        let _ = writeln!(out, "  Source of Intel: {}", report.source);
        let details = results
            .highlight_for(&report.report_id)
            .unwrap_or_else(|| report.details.primary());
        let _ = writeln!(out, "  Details: {details}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::report::{Country, Details, Report};
    use crate::domain::values::retrieval_result::RetrievalResult;
    use chrono::Utc;

    fn sample_report(id: &str, classification: &str) -> Report {
        Report {
            report_id: id.to_string(),
            date: Utc::now(),
            source: "SIGINT".into(),
            group: "Iron Jackal".into(),
            classification: classification.to_string(),
            country: Country {
                name: "Albania".into(),
                code: "AL".into(),
                coordinates: "41.1533,20.1683".into(),
            },
            compartments: vec!["TIN WHISTLE".into()],
            summary: "Something happened.".into(),
            details: Details::Text("Something happened. More detail follows.".into()),
        }
    }

    #[test]
    fn test_render_without_results() {
        let outcome = RouteOutcome {
            display: "No results found.".into(),
            results: Some(RetrievalResult::default()),
        };
        assert_eq!(render(&outcome).trim(), "No results found.");
    }

    #[test]
    fn test_render_shows_highest_classification() {
        let outcome = RouteOutcome {
            display: "See below for reports.".into(),
            results: Some(RetrievalResult {
                reports: vec![
                    sample_report("INT-2024-001", "UNCLASSIFIED"),
                    sample_report("INT-2024-002", "ULTRA SUPER SECRET"),
                ],
                highlights: Default::default(),
            }),
        };
        let text = render(&outcome);
        assert!(text.contains("Highest classification of returned results: ULTRA SUPER SECRET"));
        assert!(text.contains("Intelligence Report ID INT-2024-001"));
    }

    #[test]
    fn test_render_prefers_highlight_excerpt() {
        let mut results = RetrievalResult {
            reports: vec![sample_report("INT-2024-001", "UNCLASSIFIED")],
            highlights: Default::default(),
        };
        results.highlights.insert(
            "INT-2024-001".into(),
            "Something **:violet-background[happened]**.".into(),
        );
        let outcome = RouteOutcome {
            display: "See below for reports.".into(),
            results: Some(results),
        };
        let text = render(&outcome);
        assert!(text.contains("Details: Something **:violet-background[happened]**."));
    }
}

//! Final report formatting.

use serde::Serialize;

use crate::run::RunSummary;
use crate::severity::Severity;

/// One-line, monitoring-plugin style status for a run.
///
/// Names the domains behind a Critical or Warning status.
pub fn status_line(summary: &RunSummary) -> String {
    match summary.overall() {
        Some(Severity::Critical) => format!("Critical - Problems: {}", list(&summary.critical)),
        Some(Severity::Warning) => format!("Warning - Problems: {}", list(&summary.warning)),
        Some(Severity::Ok) => "OK - All domains SSL good".to_string(),
        Some(Severity::Unknown) | None => "Unknown - No domains to check".to_string(),
    }
}

fn list(domains: &[String]) -> String {
    format!("[{}]", domains.join(", "))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    overall: Option<Severity>,
    exit_code: i32,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// The run summary as a JSON object, with the overall status and exit code.
pub fn json_report(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport {
        overall: summary.overall(),
        exit_code: summary.exit_code(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(critical: &[&str], warning: &[&str], ok: &[&str]) -> RunSummary {
        let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        RunSummary {
            critical: owned(critical),
            warning: owned(warning),
            ok: owned(ok),
            unknown: Vec::new(),
        }
    }

    #[test]
    fn test_status_line_critical_lists_critical_domains() {
        let line = status_line(&summary(&["b.example", "c.example"], &["d.example"], &[]));
        assert_eq!(line, "Critical - Problems: [b.example, c.example]");
    }

    #[test]
    fn test_status_line_warning() {
        let line = status_line(&summary(&[], &["d.example"], &["a.example"]));
        assert_eq!(line, "Warning - Problems: [d.example]");
    }

    #[test]
    fn test_status_line_ok() {
        assert_eq!(
            status_line(&summary(&[], &[], &["a.example"])),
            "OK - All domains SSL good"
        );
    }

    #[test]
    fn test_status_line_empty_run() {
        assert_eq!(
            status_line(&RunSummary::default()),
            "Unknown - No domains to check"
        );
    }

    #[test]
    fn test_json_report_fields() {
        let json = json_report(&summary(&["b.example"], &[], &["a.example"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overall"], "critical");
        assert_eq!(value["exit_code"], 2);
        assert_eq!(value["critical"][0], "b.example");
        assert_eq!(value["ok"][0], "a.example");
        assert_eq!(value["unknown"], serde_json::json!([]));
    }

    #[test]
    fn test_json_report_empty_run_has_null_overall() {
        let json = json_report(&RunSummary::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["overall"].is_null());
        assert_eq!(value["exit_code"], 3);
    }
}

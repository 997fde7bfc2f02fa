//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON. Evidence maps are
//! ordered, so identical input always produces byte-identical output.

use super::LabeledReport;
use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render several labeled reports as a JSON array
pub fn render_batch(reports: &[LabeledReport<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{garbage_report, test_report};

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["overall_score"], report.overall_score);
        assert_eq!(parsed["letter_grade"], report.letter_grade.as_str());
        assert!(parsed["score_breakdown"]["source_quality"]["score"].is_number());
        assert!(parsed["article_stats"]["readability_score"].is_number());
    }

    #[test]
    fn test_json_garbage_report_reads_back() {
        let report = garbage_report();
        let back: AnalysisReport =
            serde_json::from_str(&render(&report).unwrap()).expect("parse JSON");
        assert!(back.is_garbage());
        assert_eq!(back.garbage_reason, report.garbage_reason);
    }

    #[test]
    fn test_json_batch_includes_source() {
        let a = test_report();
        let b = garbage_report();
        let labeled = [
            LabeledReport { source: "a.txt", report: &a },
            LabeledReport { source: "b.txt", report: &b },
        ];
        let parsed: serde_json::Value =
            serde_json::from_str(&render_batch(&labeled).unwrap()).unwrap();
        let items = parsed.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["source"], "a.txt");
        assert_eq!(items[1]["letter_grade"], "F");
    }
}

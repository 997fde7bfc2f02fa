//! Output reporters for newsgrade analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (field names match `AnalysisReport`)
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::AnalysisReport;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// A report together with the name of the article it came from
#[derive(Debug, Clone, Serialize)]
pub struct LabeledReport<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
}

/// Render a single report using an OutputFormat enum
pub fn report_with_format(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, None),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report, None),
    }
}

/// Render several reports. JSON output is an array of reports, each with a
/// `source` field; the other formats render one section per article.
pub fn report_batch(reports: &[LabeledReport<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::render_batch(reports),
        OutputFormat::Text => {
            let parts = reports
                .iter()
                .map(|r| text::render(r.report, Some(r.source)))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join("\n"))
        }
        OutputFormat::Markdown => {
            let parts = reports
                .iter()
                .map(|r| markdown::render(r.report, Some(r.source)))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join("\n---\n\n"))
        }
    }
}

/// File extension for a format, used when `--output` has none
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pipeline::Analyzer;

    pub(crate) const SAMPLE: &str = "City council approves new budget for parks and roads.\n\n\
        The council voted 5-2 on Tuesday to approve a $4.5 million budget, \
        according to Mayor Ana Lopez. \
        Sources say the shocking plan adds two parks and repairs 12 miles of road.\n\n\
        Critics argued the spending is too high. However, supporters said the repairs are overdue.";

    /// A real report for renderer tests
    pub(crate) fn test_report() -> AnalysisReport {
        Analyzer::new().analyze(SAMPLE).expect("sample analyzes")
    }

    pub(crate) fn garbage_report() -> AnalysisReport {
        Analyzer::new().analyze("ok").expect("garbage report")
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_batch_text_has_one_section_per_article() {
        let a = test_report();
        let b = garbage_report();
        let labeled = [
            LabeledReport { source: "a.txt", report: &a },
            LabeledReport { source: "b.txt", report: &b },
        ];
        let out = report_batch(&labeled, OutputFormat::Text).unwrap();
        assert!(out.contains("a.txt"));
        assert!(out.contains("b.txt"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
        assert_eq!(file_extension(OutputFormat::Json), "json");
    }
}

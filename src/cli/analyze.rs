//! Analyze command - score one or more articles

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use newsgrade::cache::CachedAnalyzer;
use newsgrade::config::{load_config, AnalysisConfig};
use newsgrade::models::AnalysisReport;
use newsgrade::pipeline::Analyzer;
use newsgrade::reporters::{self, LabeledReport, OutputFormat};
use newsgrade::AnalysisError;
use rayon::prelude::*;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Exit code when an article falls below `--fail-below`
const EXIT_BELOW_THRESHOLD: i32 = 1;
/// Exit code when an article is empty
const EXIT_EMPTY_INPUT: i32 = 2;

#[derive(Debug)]
pub(super) struct AnalyzeOptions {
    pub files: Vec<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_below: Option<u8>,
    pub explain_score: bool,
    pub config: Option<PathBuf>,
}

/// Outcome for one input
enum Outcome {
    Report(Arc<AnalysisReport>),
    Empty,
}

pub(super) fn run(opts: AnalyzeOptions) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(opts.config.as_deref(), &cwd)?;

    let format = resolve_format(opts.format.as_deref(), &config)?;
    let fail_below = opts.fail_below.or(config.defaults.fail_below);

    let analyzer = CachedAnalyzer::new(Analyzer::from_config(&config)?);
    let outcomes = analyze_all(&analyzer, &opts.files)?;

    let mut empty = Vec::new();
    let mut reports: Vec<(&str, Arc<AnalysisReport>)> = Vec::new();
    for (source, outcome) in opts.files.iter().zip(outcomes) {
        match outcome {
            Outcome::Report(report) => reports.push((display_name(source), report)),
            Outcome::Empty => empty.push(display_name(source)),
        }
    }

    if !reports.is_empty() {
        let rendered = render(&reports, format)?;
        let rendered = if opts.explain_score {
            append_explanation(rendered, &reports, analyzer.analyzer(), format)
        } else {
            rendered
        };
        write_output(&rendered, opts.output.as_deref(), format)?;
    }

    if !empty.is_empty() {
        for source in &empty {
            eprintln!("{} {}: {}", style("error:").red().bold(), source, AnalysisError::EmptyInput);
        }
        std::process::exit(EXIT_EMPTY_INPUT);
    }

    check_fail_below(fail_below, &reports);
    Ok(())
}

/// Flag, then config default, then text
fn resolve_format(flag: Option<&str>, config: &AnalysisConfig) -> Result<OutputFormat> {
    let name = flag
        .or(config.defaults.format.as_deref())
        .unwrap_or("text");
    OutputFormat::from_str(name)
}

fn display_name(source: &str) -> &str {
    if source == "-" {
        "<stdin>"
    } else {
        source
    }
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read article from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
    }
}

/// Read every source, then score them in parallel. Read errors abort the
/// run; empty articles are reported per file.
fn analyze_all(analyzer: &CachedAnalyzer, sources: &[String]) -> Result<Vec<Outcome>> {
    let texts = sources
        .iter()
        .map(|s| read_source(s))
        .collect::<Result<Vec<_>>>()?;

    let bar = if texts.len() > 1 && std::io::stderr().is_terminal() {
        let bar = ProgressBar::new(texts.len() as u64);
        bar.set_style(create_bar_style());
        bar.set_message("Scoring articles...");
        bar
    } else {
        ProgressBar::hidden()
    };

    let outcomes = texts
        .par_iter()
        .map(|text| {
            let outcome = match analyzer.analyze(text) {
                Ok(report) => Ok(Outcome::Report(report)),
                Err(AnalysisError::EmptyInput) => Ok(Outcome::Empty),
                Err(e) => Err(anyhow::Error::from(e)),
            };
            bar.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>();

    bar.finish_and_clear();
    let outcomes = outcomes?;
    debug!("Analyzed {} articles ({} cached)", texts.len(), analyzer.len());
    Ok(outcomes)
}

fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}

fn render(reports: &[(&str, Arc<AnalysisReport>)], format: OutputFormat) -> Result<String> {
    if let [(_, report)] = reports {
        return reporters::report_with_format(report, format);
    }
    let labeled: Vec<LabeledReport<'_>> = reports
        .iter()
        .map(|(source, report)| LabeledReport {
            source: *source,
            report: report.as_ref(),
        })
        .collect();
    reporters::report_batch(&labeled, format)
}

/// Score explanations go after the report. JSON stays machine-readable, so
/// its explanation is printed to stderr instead.
fn append_explanation(
    mut rendered: String,
    reports: &[(&str, Arc<AnalysisReport>)],
    analyzer: &Analyzer,
    format: OutputFormat,
) -> String {
    let explanations: Vec<String> = reports
        .iter()
        .map(|(source, report)| {
            if reports.len() > 1 {
                format!("# {}\n\n{}", source, analyzer.explain(report))
            } else {
                analyzer.explain(report)
            }
        })
        .collect();

    if format == OutputFormat::Json {
        eprintln!("{}", explanations.join("\n"));
        return rendered;
    }
    rendered.push('\n');
    rendered.push_str(&explanations.join("\n"));
    rendered
}

/// `--output` path, with the format's extension added when it has none
fn output_path(path: &Path, format: OutputFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(reporters::file_extension(format))
    }
}

fn write_output(rendered: &str, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    match output {
        Some(path) => {
            let path = output_path(path, format);
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} report to {}",
                style("✓").green(),
                format,
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Exit with code 1 if any article is below the threshold
fn check_fail_below(threshold: Option<u8>, reports: &[(&str, Arc<AnalysisReport>)]) {
    let Some(threshold) = threshold else {
        return;
    };
    let failing: Vec<_> = reports
        .iter()
        .filter(|(_, r)| r.overall_score < threshold)
        .collect();
    if !failing.is_empty() {
        for (source, report) in &failing {
            eprintln!(
                "{} scored {} (below --fail-below={})",
                source, report.overall_score, threshold
            );
        }
        std::process::exit(EXIT_BELOW_THRESHOLD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format_precedence() {
        let mut config = AnalysisConfig::default();
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Text);

        config.defaults.format = Some("json".into());
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some("md"), &config).unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_analyze_all_reports_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.txt");
        let story = dir.path().join("story.txt");
        std::fs::write(&empty, "  \n").unwrap();
        std::fs::write(
            &story,
            "The council met on Tuesday and approved the budget for the coming year. \
             Mayor Ana Lopez said the plan adds two parks and repairs several roads.",
        )
        .unwrap();

        let analyzer = CachedAnalyzer::new(Analyzer::new());
        let sources = vec![
            empty.to_string_lossy().into_owned(),
            story.to_string_lossy().into_owned(),
        ];
        let outcomes = analyze_all(&analyzer, &sources).unwrap();
        assert!(matches!(outcomes[0], Outcome::Empty));
        assert!(matches!(outcomes[1], Outcome::Report(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let analyzer = CachedAnalyzer::new(Analyzer::new());
        let err = analyze_all(&analyzer, &["/nonexistent/story.txt".to_string()]);
        assert!(err.is_err());
    }

    #[test]
    fn test_output_path_adds_missing_extension() {
        assert_eq!(
            output_path(Path::new("out/report"), OutputFormat::Markdown),
            PathBuf::from("out/report.md")
        );
        assert_eq!(
            output_path(Path::new("report.txt"), OutputFormat::Json),
            PathBuf::from("report.txt")
        );
    }

    #[test]
    fn test_explanation_appended_for_text() {
        let analyzer = Analyzer::new();
        let report = Arc::new(analyzer.analyze("ok").unwrap());
        let reports = vec![("a.txt", report)];
        let out = append_explanation("REPORT".into(), &reports, &analyzer, OutputFormat::Text);
        assert!(out.starts_with("REPORT\n"));
        assert!(out.contains("## Score Breakdown"));

        let json = append_explanation("{}".into(), &reports, &analyzer, OutputFormat::Json);
        assert_eq!(json, "{}");
    }
}

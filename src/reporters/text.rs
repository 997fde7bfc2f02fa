//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, LetterGrade, Priority, Severity};
use anyhow::Result;
use std::fmt::Write;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: LetterGrade) -> &'static str {
    match grade.letter() {
        'A' => "\x1b[32m", // Green
        'B' => "\x1b[92m", // Light green
        'C' => "\x1b[33m", // Yellow
        'D' => "\x1b[91m", // Light red
        _ => "\x1b[31m",   // Red
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m",
        Severity::High => "\x1b[91m",
        Severity::Medium => "\x1b[33m",
        Severity::Low => "\x1b[34m",
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "[high]",
        Priority::Medium => "[med] ",
        Priority::Low => "[low] ",
    }
}

/// Score with color thresholds
fn format_score(score: f64) -> String {
    let color = if score >= 80.0 {
        "\x1b[32m"
    } else if score >= 60.0 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{:>5.1}{RESET}", score)
}

/// 20-cell bar for a 0-100 score
fn score_bar(score: f64) -> String {
    let filled = ((score / 5.0).round() as usize).min(20);
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport, source: Option<&str>) -> Result<String> {
    let mut out = String::new();

    let title = match source {
        Some(s) => format!("newsgrade: {s}"),
        None => "newsgrade analysis".to_string(),
    };
    writeln!(out, "\n{BOLD}{title}{RESET}")?;
    writeln!(out, "{DIM}──────────────────────────────────────{RESET}")?;

    let grade_c = grade_color(report.letter_grade);
    writeln!(
        out,
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  Confidence: {:.0}%",
        report.overall_score,
        report.letter_grade,
        report.confidence * 100.0
    )?;
    let stats = &report.article_stats;
    writeln!(
        out,
        "{DIM}Words: {}  Sentences: {}  Paragraphs: {}  Reading ease: {:.1}{RESET}\n",
        stats.word_count, stats.sentence_count, stats.paragraph_count, stats.readability_score
    )?;

    if report.is_garbage() {
        for reason in &report.critical_issues {
            writeln!(out, "\x1b[31m✗{RESET} {}", reason)?;
        }
        writeln!(out, "{DIM}No criteria were scored.{RESET}")?;
        return Ok(out);
    }

    writeln!(out, "{BOLD}SCORES{RESET}")?;
    for c in report.score_breakdown.iter() {
        writeln!(
            out,
            "  {:<18} {} {DIM}{}{RESET}",
            c.criterion.label(),
            format_score(c.score),
            score_bar(c.score)
        )?;
    }
    writeln!(out)?;

    if !report.strengths.is_empty() {
        writeln!(out, "{BOLD}STRENGTHS{RESET}")?;
        for s in &report.strengths {
            writeln!(out, "  \x1b[32m✓{RESET} {}", s)?;
        }
        writeln!(out)?;
    }

    if !report.critical_issues.is_empty() {
        writeln!(out, "{BOLD}CRITICAL{RESET}")?;
        for s in &report.critical_issues {
            writeln!(out, "  \x1b[31m✗{RESET} {}", s)?;
        }
        writeln!(out)?;
    }

    if !report.detailed_issues.is_empty() {
        writeln!(out, "{BOLD}ISSUES{RESET}")?;
        for issue in &report.detailed_issues {
            let color = severity_color(issue.severity);
            writeln!(
                out,
                "  {color}{}{RESET} {} {DIM}({}){RESET}",
                severity_tag(issue.severity),
                issue.issue,
                issue.category.label()
            )?;
            writeln!(out, "      {DIM}→ {}{RESET}", issue.suggestion)?;
            if let Some(example) = &issue.example {
                writeln!(out, "      {DIM}e.g. \"{}\"{RESET}", example)?;
            }
        }
        writeln!(out)?;
    }

    if !report.improvement_actions.is_empty() {
        writeln!(out, "{BOLD}NEXT STEPS{RESET}")?;
        for action in &report.improvement_actions {
            writeln!(
                out,
                "  {} {} {DIM}(+{:.1} pts){RESET}",
                priority_tag(action.priority),
                action.action,
                action.potential_gain
            )?;
            writeln!(out, "      {DIM}before:{RESET} {}", action.before)?;
            writeln!(out, "      {DIM}after: {RESET} {}", action.after)?;
        }
        writeln!(out)?;
    }

    if !report.learning_recommendations.is_empty() {
        writeln!(out, "{BOLD}LEARN{RESET}")?;
        for rec in &report.learning_recommendations {
            writeln!(out, "  • {} {DIM}- {}{RESET}", rec.module, rec.description)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{DIM}{}{RESET}", report.confidence_explanation)?;
    for w in &report.warnings {
        writeln!(out, "{DIM}! {}{RESET}", w)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{garbage_report, test_report};

    #[test]
    fn test_text_render_contains_sections() {
        let report = test_report();
        let out = render(&report, Some("story.txt")).expect("render text");
        assert!(out.contains("newsgrade: story.txt"));
        assert!(out.contains("SCORES"));
        assert!(out.contains("Source Quality"));
        assert!(out.contains(report.letter_grade.as_str()));
    }

    #[test]
    fn test_text_render_garbage() {
        let out = render(&garbage_report(), None).expect("render text");
        assert!(out.contains("too short"));
        assert!(!out.contains("SCORES"));
    }

    #[test]
    fn test_score_bar_width() {
        assert_eq!(score_bar(0.0).chars().count(), 20);
        assert_eq!(score_bar(100.0), "█".repeat(20));
        assert_eq!(score_bar(52.0).chars().filter(|c| *c == '█').count(), 10);
    }
}

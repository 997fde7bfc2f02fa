//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pull request comments on editorial repositories, newsroom
//! wikis, and course feedback documents.

use crate::models::{AnalysisReport, LetterGrade, Severity};
use anyhow::Result;
use chrono::Local;
use std::fmt::Write;

/// Maximum detailed issues listed
const MAX_ISSUES: usize = 20;

fn grade_emoji(grade: LetterGrade) -> &'static str {
    match grade.letter() {
        'A' => "🏆",
        'B' => "⭐",
        'C' => "⚠️",
        'D' => "❌",
        _ => "💀",
    }
}

fn severity_emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴",
        Severity::High => "🟠",
        Severity::Medium => "🟡",
        Severity::Low => "🔵",
    }
}

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport, source: Option<&str>) -> Result<String> {
    let mut md = String::new();
    render_header(&mut md, report, source)?;

    if report.is_garbage() {
        writeln!(md, "> **Not analyzed:** {}\n", report.critical_issues.join("; "))?;
        render_footer(&mut md)?;
        return Ok(md);
    }

    render_scores(&mut md, report)?;
    render_list(&mut md, "Strengths", &report.strengths, "✅")?;
    render_list(&mut md, "Critical Issues", &report.critical_issues, "❗")?;
    render_issues(&mut md, report)?;
    render_actions(&mut md, report)?;
    render_learning(&mut md, report)?;
    render_stats(&mut md, report)?;
    render_footer(&mut md)?;
    Ok(md)
}

fn render_header(md: &mut String, report: &AnalysisReport, source: Option<&str>) -> Result<()> {
    match source {
        Some(s) => writeln!(md, "# Article Quality Report: `{}`\n", s)?,
        None => writeln!(md, "# Article Quality Report\n")?,
    }
    writeln!(
        md,
        "{} **Grade {}** | Score **{}/100** | Confidence {:.0}%\n",
        grade_emoji(report.letter_grade),
        report.letter_grade,
        report.overall_score,
        report.confidence * 100.0
    )?;
    writeln!(md, "_{}_\n", report.confidence_explanation)?;
    for w in &report.warnings {
        writeln!(md, "> ⚠️ {}", w)?;
    }
    if !report.warnings.is_empty() {
        writeln!(md)?;
    }
    Ok(())
}

fn render_scores(md: &mut String, report: &AnalysisReport) -> Result<()> {
    writeln!(md, "## Scores\n")?;
    writeln!(md, "| Criterion | Score |")?;
    writeln!(md, "|-----------|------:|")?;
    for c in report.score_breakdown.iter() {
        writeln!(md, "| {} | {:.1} |", c.criterion.label(), c.score)?;
    }
    writeln!(md)?;
    Ok(())
}

fn render_list(md: &mut String, title: &str, items: &[String], bullet: &str) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(md, "## {}\n", title)?;
    for item in items {
        writeln!(md, "- {} {}", bullet, item)?;
    }
    writeln!(md)?;
    Ok(())
}

fn render_issues(md: &mut String, report: &AnalysisReport) -> Result<()> {
    if report.detailed_issues.is_empty() {
        return Ok(());
    }
    writeln!(md, "## Detailed Issues\n")?;
    for issue in report.detailed_issues.iter().take(MAX_ISSUES) {
        writeln!(
            md,
            "- {} **{}** ({}): {}",
            severity_emoji(issue.severity),
            issue.issue,
            issue.category.label(),
            issue.suggestion
        )?;
        if let Some(example) = &issue.example {
            writeln!(md, "  > {}", example)?;
        }
    }
    if report.detailed_issues.len() > MAX_ISSUES {
        writeln!(
            md,
            "\n_...and {} more_",
            report.detailed_issues.len() - MAX_ISSUES
        )?;
    }
    writeln!(md)?;
    Ok(())
}

fn render_actions(md: &mut String, report: &AnalysisReport) -> Result<()> {
    if report.improvement_actions.is_empty() {
        return Ok(());
    }
    writeln!(md, "## Improvement Actions\n")?;
    for (i, action) in report.improvement_actions.iter().enumerate() {
        writeln!(
            md,
            "{}. **{}** _(priority: {}, +{:.1} pts)_",
            i + 1,
            action.action,
            action.priority,
            action.potential_gain
        )?;
        writeln!(md, "   - Before: {}", action.before)?;
        writeln!(md, "   - After: {}", action.after)?;
    }
    writeln!(md)?;
    Ok(())
}

fn render_learning(md: &mut String, report: &AnalysisReport) -> Result<()> {
    if report.learning_recommendations.is_empty() {
        return Ok(());
    }
    writeln!(md, "## Learning Recommendations\n")?;
    for rec in &report.learning_recommendations {
        writeln!(md, "### {}\n", rec.module)?;
        writeln!(md, "{}\n", rec.description)?;
        for r in &rec.resources {
            writeln!(md, "- {} ({})", r.title, r.kind)?;
        }
        writeln!(md)?;
    }
    Ok(())
}

fn render_stats(md: &mut String, report: &AnalysisReport) -> Result<()> {
    let s = &report.article_stats;
    writeln!(md, "## Article Statistics\n")?;
    writeln!(md, "| Metric | Value |")?;
    writeln!(md, "|--------|------:|")?;
    writeln!(md, "| Words | {} |", s.word_count)?;
    writeln!(md, "| Sentences | {} |", s.sentence_count)?;
    writeln!(md, "| Paragraphs | {} |", s.paragraph_count)?;
    writeln!(md, "| Avg. sentence length | {:.1} |", s.avg_sentence_length)?;
    writeln!(md, "| Reading ease | {:.1} |", s.readability_score)?;
    writeln!(md, "| Syllables per word | {:.2} |", s.syllables_per_word)?;
    writeln!(md)?;
    Ok(())
}

fn render_footer(md: &mut String) -> Result<()> {
    writeln!(
        md,
        "---\n_Generated by newsgrade {} on {}_",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{garbage_report, test_report};

    #[test]
    fn test_markdown_render_sections() {
        let md = render(&test_report(), Some("story.txt")).expect("render markdown");
        assert!(md.starts_with("# Article Quality Report: `story.txt`"));
        assert!(md.contains("## Scores"));
        assert!(md.contains("| Headline Quality |"));
        assert!(md.contains("## Article Statistics"));
        assert!(md.contains("Generated by newsgrade"));
    }

    #[test]
    fn test_markdown_render_garbage() {
        let md = render(&garbage_report(), None).expect("render markdown");
        assert!(md.contains("Not analyzed"));
        assert!(!md.contains("## Scores"));
    }
}

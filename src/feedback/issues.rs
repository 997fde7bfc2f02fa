//! Evidence-backed detailed issues
//!
//! Issues are read off the evidence each scorer recorded, so every issue
//! points at something concrete in the text. Output is sorted by severity
//! (critical first), then report order.

use crate::models::{
    deterministic_issue_id, Criterion, CriterionScore, DetailedIssue, ScoreBreakdown, Severity,
};
use crate::parsers::ParsedStructure;

const LONG_SENTENCE_WORDS: f64 = 25.0;
const HARD_TO_READ_FLESCH: f64 = 30.0;
const SHORT_HEADLINE_WORDS: usize = 6;
const LONG_HEADLINE_WORDS: usize = 20;

fn issue(
    category: Criterion,
    severity: Severity,
    issue: String,
    suggestion: &str,
    example: Option<String>,
) -> DetailedIssue {
    DetailedIssue {
        id: deterministic_issue_id(category.as_str(), &issue),
        category,
        severity,
        issue,
        suggestion: suggestion.to_string(),
        example,
    }
}

/// "shocking (2), stunning (1)" for all terms recorded under `key`
fn term_list(score: &CriterionScore, key: &str) -> String {
    let prefix = format!("{}:", key);
    score
        .terms_with_prefix(&prefix)
        .map(|(term, n)| format!("{} ({})", term, n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn first_term(score: &CriterionScore, key: &str) -> Option<String> {
    let prefix = format!("{}:", key);
    score
        .terms_with_prefix(&prefix)
        .next()
        .map(|(term, _)| term.to_string())
}

/// First sentence mentioning `term` (case-insensitive)
pub(crate) fn sentence_containing(parsed: &ParsedStructure, term: &str) -> Option<String> {
    let needle = term.to_lowercase();
    parsed
        .sentences
        .iter()
        .find(|s| s.to_lowercase().contains(&needle))
        .cloned()
}

fn example_for(score: &CriterionScore, key: &str, parsed: &ParsedStructure) -> Option<String> {
    first_term(score, key).and_then(|t| sentence_containing(parsed, &t))
}

fn count_severity(n: usize, medium_at: usize, high_at: usize) -> Severity {
    if n >= high_at {
        Severity::High
    } else if n >= medium_at {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn objectivity(s: &CriterionScore, parsed: &ParsedStructure, out: &mut Vec<DetailedIssue>) {
    let loaded = s.count("loaded_words");
    if loaded > 0 {
        out.push(issue(
            Criterion::Objectivity,
            count_severity(loaded, 2, 5),
            format!("Loaded language: {}", term_list(s, "loaded_words")),
            "Replace emotionally charged words with a neutral account of what happened",
            example_for(s, "loaded_words", parsed),
        ));
    }
    let opinion = s.count("opinion_words");
    if opinion > 0 {
        out.push(issue(
            Criterion::Objectivity,
            count_severity(opinion, 2, 5),
            format!("Opinion adverbs: {}", term_list(s, "opinion_words")),
            "Remove adverbs that tell the reader what to conclude",
            example_for(s, "opinion_words", parsed),
        ));
    }
    let exclamations = s.count("exclamations");
    if exclamations > 0 {
        out.push(issue(
            Criterion::Objectivity,
            count_severity(exclamations, 2, 4),
            format!("{} exclamation mark(s)", exclamations),
            "Use periods; let the facts carry the weight",
            None,
        ));
    }
}

fn source_quality(s: &CriterionScore, parsed: &ParsedStructure, out: &mut Vec<DetailedIssue>) {
    if !s.flag("has_named_sources") {
        out.push(issue(
            Criterion::SourceQuality,
            Severity::High,
            "No named sources found".to_string(),
            "Attribute claims to identified people or institutions",
            Some("According to Dr. Jane Smith, an economist at State University, ...".to_string()),
        ));
    }
    let weak = s.count("weak_attributions");
    if weak > 0 {
        out.push(issue(
            Criterion::SourceQuality,
            count_severity(weak, 1, 3),
            format!("Anonymous attribution: {}", term_list(s, "weak_attributions")),
            "Name the source, or explain why anonymity was granted",
            example_for(s, "weak_attributions", parsed),
        ));
    }
}

fn factual_accuracy(s: &CriterionScore, parsed: &ParsedStructure, out: &mut Vec<DetailedIssue>) {
    if s.count("data_points") == 0 {
        out.push(issue(
            Criterion::FactualAccuracy,
            Severity::Medium,
            "No specific figures or statistics".to_string(),
            "Support key claims with numbers: amounts, percentages, counts",
            None,
        ));
    }
    if !s.flag("has_date") {
        out.push(issue(
            Criterion::FactualAccuracy,
            Severity::Low,
            "No dates or time references".to_string(),
            "Say when events happened",
            None,
        ));
    }
    let vague = s.count("vague_claims");
    if vague > 0 {
        out.push(issue(
            Criterion::FactualAccuracy,
            count_severity(vague, 1, 3),
            format!("Vague claims: {}", term_list(s, "vague_claims")),
            "Cite the specific study or expert instead of a generic appeal",
            example_for(s, "vague_claims", parsed),
        ));
    }
    let weasel = s.count("weasel_words");
    if weasel > 0 {
        out.push(issue(
            Criterion::FactualAccuracy,
            count_severity(weasel, 1, 3),
            format!("Hedged claims: {}", term_list(s, "weasel_words")),
            "Confirm the claim and attribute it, or leave it out",
            example_for(s, "weasel_words", parsed),
        ));
    }
}

fn writing_clarity(s: &CriterionScore, out: &mut Vec<DetailedIssue>) {
    if let Some(flesch) = s.metric("flesch_reading_ease") {
        if flesch < HARD_TO_READ_FLESCH {
            out.push(issue(
                Criterion::WritingClarity,
                Severity::High,
                format!("Very difficult to read (Flesch reading ease {:.1})", flesch),
                "Use shorter words and split long sentences",
                None,
            ));
        }
    }
    if let Some(avg) = s.metric("avg_sentence_length") {
        if avg > LONG_SENTENCE_WORDS {
            out.push(issue(
                Criterion::WritingClarity,
                Severity::Medium,
                format!("Long average sentence length ({:.1} words)", avg),
                "Aim for 15-20 words per sentence",
                None,
            ));
        }
    }
    let passive = s.count("passive_voice");
    if passive > 3 {
        out.push(issue(
            Criterion::WritingClarity,
            count_severity(passive, 4, 6),
            format!("Passive voice used {} times", passive),
            "Name who did what: \"the council approved\" rather than \"was approved\"",
            None,
        ));
    }
}

fn ethical_standards(s: &CriterionScore, parsed: &ParsedStructure, out: &mut Vec<DetailedIssue>) {
    let privacy = s.count("privacy_violations");
    if privacy > 0 {
        out.push(issue(
            Criterion::EthicalStandards,
            Severity::Critical,
            format!("Possible personal data exposed ({} match(es))", privacy),
            "Remove identification, account, and card numbers before publishing",
            None,
        ));
    }
    if s.flag("missing_balance") {
        out.push(issue(
            Criterion::EthicalStandards,
            Severity::Medium,
            "No opposing or alternative viewpoint".to_string(),
            "Include the response of those affected or of critics",
            None,
        ));
    }
    let inflammatory = s.count("inflammatory_words");
    if inflammatory > 0 {
        out.push(issue(
            Criterion::EthicalStandards,
            Severity::High,
            format!("Inflammatory language: {}", term_list(s, "inflammatory_words")),
            "Describe actions, not character",
            example_for(s, "inflammatory_words", parsed),
        ));
    }
}

fn bias_control(s: &CriterionScore, parsed: &ParsedStructure, out: &mut Vec<DetailedIssue>) {
    let absolutes = s.count("absolute_words");
    if absolutes > 3 {
        out.push(issue(
            Criterion::BiasControl,
            count_severity(absolutes, 6, 10),
            format!("Absolute language: {}", term_list(s, "absolute_words")),
            "Qualify sweeping claims with the evidence behind them",
            example_for(s, "absolute_words", parsed),
        ));
    }
    let opinions = s.count("unattributed_opinions");
    if opinions > 0 {
        out.push(issue(
            Criterion::BiasControl,
            count_severity(opinions, 1, 3),
            format!("Unattributed opinion: {}", term_list(s, "unattributed_opinions")),
            "Attribute opinions to a named source",
            example_for(s, "unattributed_opinions", parsed),
        ));
    }
}

fn structure_flow(s: &CriterionScore, out: &mut Vec<DetailedIssue>) {
    if s.count("paragraph_count") < 2 {
        out.push(issue(
            Criterion::StructureFlow,
            Severity::Medium,
            "Text is a single block".to_string(),
            "Break the story into short paragraphs, one idea each",
            None,
        ));
    }
    if s.flag("long_lead") {
        out.push(issue(
            Criterion::StructureFlow,
            Severity::Low,
            format!("Lead paragraph is {} words", s.count("lead_words")),
            "Keep the lead to 20-50 words covering who, what, when, and where",
            None,
        ));
    }
}

fn headline_quality(s: &CriterionScore, out: &mut Vec<DetailedIssue>) {
    let headline = match s.evidence.get("headline") {
        Some(crate::models::Evidence::Text(t)) if !t.is_empty() => Some(t.clone()),
        _ => None,
    };
    let clickbait = s.count("clickbait");
    if clickbait > 0 {
        out.push(issue(
            Criterion::HeadlineQuality,
            Severity::High,
            "Clickbait phrasing in the headline".to_string(),
            "State the news plainly instead of teasing it",
            headline.clone(),
        ));
    }
    let loaded = s.count("headline_loaded_words");
    if loaded > 0 {
        out.push(issue(
            Criterion::HeadlineQuality,
            Severity::Medium,
            format!("Loaded words in headline: {}", term_list(s, "headline_loaded_words")),
            "Use neutral verbs and nouns in the headline",
            headline.clone(),
        ));
    }
    let words = s.count("headline_words");
    if words > LONG_HEADLINE_WORDS {
        out.push(issue(
            Criterion::HeadlineQuality,
            Severity::Low,
            format!("Headline is long ({} words)", words),
            "Aim for 8-12 words",
            headline,
        ));
    } else if words < SHORT_HEADLINE_WORDS {
        out.push(issue(
            Criterion::HeadlineQuality,
            Severity::Low,
            format!("Headline is short ({} words)", words),
            "Aim for 8-12 words that say what happened",
            headline,
        ));
    }
}

pub fn detailed_issues(breakdown: &ScoreBreakdown, parsed: &ParsedStructure) -> Vec<DetailedIssue> {
    let mut out = Vec::new();
    objectivity(&breakdown.objectivity, parsed, &mut out);
    source_quality(&breakdown.source_quality, parsed, &mut out);
    factual_accuracy(&breakdown.factual_accuracy, parsed, &mut out);
    writing_clarity(&breakdown.writing_clarity, &mut out);
    ethical_standards(&breakdown.ethical_standards, parsed, &mut out);
    bias_control(&breakdown.bias_control, parsed, &mut out);
    structure_flow(&breakdown.structure_flow, &mut out);
    headline_quality(&breakdown.headline_quality, &mut out);
    out.sort_by(|a, b| b.severity.cmp(&a.severity));
    out
}

//! End-to-end scoring scenarios through the public library API

use newsgrade::models::Criterion;
use newsgrade::reporters::{self, OutputFormat};
use newsgrade::{analyze, AnalysisError, Analyzer, LetterGrade};

/// Four paragraphs, three named attributions, no loaded or absolute words.
/// `{x}` marks five spots where an adjective can be injected.
const TEMPLATE: &str = "City council approves new library funding after long public debate. \
The Riverside council voted 5-2 on Tuesday to spend $4.5 million on a new branch library, \
according to Dr. Jane Smith, who chairs the budget committee.

The branch will open in 2026 and serve about 3,200 families in the eastern district. \
Library use in the district rose 12 percent last year, according to Prof. Alan Reyes of the \
state university. Reyes said the {x}current building lacks space for study rooms and computer \
labs. The plan also adds a reading garden, a small cafe, and longer evening hours on weekdays. \
Construction crews expect to begin work on March 3 once the final permits arrive from the county.

However, critics argued the {x}project costs too much during a tight budget year. Council \
member Tom Baker, who cast one of the two votes against the plan, said the city should repair \
the existing library first. \"We have roads and schools that need attention too,\" Baker told \
reporters after the {x}meeting. According to Dr. Maria Chen, a city planner, the old building \
would cost $1.8 million to repair and would still lack modern features.

Supporters said the new branch would give students a quiet place to work after school. \
Dr. Jane Smith said the council will review the {x}costs again in June and publish a full \
report for residents. The library board meets next on Thursday evening at the town hall, and \
members of the public may speak at the start of the session. Residents can find the {x}meeting \
agenda on the city website.";

fn article(adjective: &str) -> String {
    TEMPLATE.replace("{x}", adjective)
}

#[test]
fn test_well_sourced_article_grades_well() {
    let report = analyze(&article("")).expect("analysis");
    let breakdown = &report.score_breakdown;

    assert!(!report.is_garbage());
    assert_eq!(report.article_stats.paragraph_count, 4);
    assert!(breakdown.get(Criterion::SourceQuality).count("named_sources") >= 3);
    assert!(breakdown.score(Criterion::SourceQuality) >= 80.0);
    assert!(breakdown.score(Criterion::Objectivity) >= 90.0);
    assert!(report.overall_score >= 80, "overall {}", report.overall_score);
    assert!(report.letter_grade >= LetterGrade::BMinus);
    assert_eq!(report.letter_grade, LetterGrade::from_score(report.overall_score));
}

#[test]
fn test_loaded_words_cost_three_points_each() {
    let baseline = analyze(&article("")).expect("baseline");
    let loaded = analyze(&article("shocking ")).expect("loaded");

    let before = baseline.score_breakdown.score(Criterion::Objectivity);
    let after = loaded.score_breakdown.score(Criterion::Objectivity);
    assert_eq!(before - after, 15.0);
    assert_eq!(
        loaded
            .score_breakdown
            .get(Criterion::Objectivity)
            .count("loaded_words:shocking"),
        5
    );
}

#[test]
fn test_too_short_input() {
    let report = analyze("ok").expect("garbage is a report");
    assert!(report.is_garbage());
    assert_eq!(report.letter_grade, LetterGrade::F);
    assert!(report.critical_issues[0].contains("too short"));
}

#[test]
fn test_all_caps_input() {
    let shouting: String = article("")
        .split_whitespace()
        .take(50)
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    let report = analyze(&shouting).expect("garbage is a report");
    assert!(report.is_garbage());
    assert_eq!(report.overall_score, 20);
    assert_eq!(report.letter_grade, LetterGrade::F);
    assert!(report.critical_issues[0].contains("ALL CAPS"));
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(analyze(""), Err(AnalysisError::EmptyInput)));
    assert!(matches!(analyze(" \n\t "), Err(AnalysisError::EmptyInput)));
}

#[test]
fn test_json_output_is_byte_identical_across_runs() {
    let text = article("");
    let first =
        reporters::report_with_format(&analyze(&text).unwrap(), OutputFormat::Json).unwrap();
    for _ in 0..3 {
        let fresh = Analyzer::new().analyze(&text).unwrap();
        let again = reporters::report_with_format(&fresh, OutputFormat::Json).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_feedback_is_evidence_backed() {
    let report = analyze(&article("shocking ")).expect("analysis");
    let loaded_issue = report
        .detailed_issues
        .iter()
        .find(|i| i.category == Criterion::Objectivity)
        .expect("objectivity issue for loaded words");
    assert!(loaded_issue.issue.contains("shocking"));
    assert!(!report.learning_recommendations.is_empty());
}

#[test]
fn test_short_article_has_lower_confidence() {
    let full = article("");
    let lead = full.split("\n\n").next().expect("first paragraph");

    let long_report = analyze(&full).expect("full article");
    let short_report = analyze(lead).expect("lead only");
    assert!(long_report.article_stats.word_count > 200);
    assert!(short_report.article_stats.word_count < 100);
    assert!(short_report.confidence < long_report.confidence);
    assert!(!short_report.warnings.is_empty());
}

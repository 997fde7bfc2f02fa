//! Property tests for scoring invariants

use newsgrade::models::Criterion;
use newsgrade::{analyze, AnalysisError, LetterGrade};
use proptest::prelude::*;

const BASE: &str = "The council met on Tuesday to review the budget for the coming year. \
Mayor Ana Lopez said the plan adds two parks and repairs twelve miles of road. \
Critics argued the spending is too high, according to Dr. Jane Smith of the finance office.";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_scores_stay_in_range(text in "[A-Za-z0-9 ,.!?'\"$%\n-]{0,600}") {
        match analyze(&text) {
            Ok(report) => {
                prop_assert!(report.overall_score <= 100);
                for c in report.score_breakdown.iter() {
                    prop_assert!((0.0..=100.0).contains(&c.score), "{} = {}", c.criterion, c.score);
                }
                prop_assert!(report.confidence > 0.0 && report.confidence <= 1.0);
                if report.is_garbage() {
                    prop_assert_eq!(report.letter_grade, LetterGrade::F);
                } else {
                    let expected = LetterGrade::from_score(report.overall_score);
                    prop_assert_eq!(report.letter_grade, expected);
                }
            }
            Err(AnalysisError::EmptyInput) => prop_assert!(text.trim().is_empty()),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(words in proptest::collection::vec("[a-z]{1,9}", 10..80)) {
        let mut text = words.join(" ");
        text.insert_str(0, "Reporters said ");
        text.push('.');
        let a = serde_json::to_string(&analyze(&text).unwrap()).unwrap();
        let b = serde_json::to_string(&analyze(&text).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_each_loaded_word_costs_three_points(k in 0usize..10) {
        let mut text = BASE.to_string();
        for _ in 0..k {
            text.push_str(" The shocking cost drew comment from residents.");
        }
        let report = analyze(&text).unwrap();
        prop_assert!(!report.is_garbage());
        let objectivity = report.score_breakdown.score(Criterion::Objectivity);
        prop_assert_eq!(objectivity, 100.0 - 3.0 * k as f64);
    }
}

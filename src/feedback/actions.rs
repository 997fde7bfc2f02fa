//! Prioritized improvement actions
//!
//! One action per criterion scoring below the weak threshold. The gain is the
//! weighted points the criterion leaves on the table, `weight * (100 - score)`,
//! and actions are ordered by gain (largest first).

use super::issues::sentence_containing;
use crate::config::CriterionWeights;
use crate::models::{
    Criterion, CriterionScore, Evidence, ImprovementAction, Priority, ScoreBreakdown,
};
use crate::parsers::ParsedStructure;

const HIGH_PRIORITY_GAIN: f64 = 5.0;
const MEDIUM_PRIORITY_GAIN: f64 = 2.0;

struct Template {
    action: &'static str,
    before: &'static str,
    after: &'static str,
    /// Evidence key whose first matched term locates a real "before" sentence
    evidence_key: Option<&'static str>,
}

fn template(criterion: Criterion) -> Template {
    match criterion {
        Criterion::Objectivity => Template {
            action: "Replace loaded language with neutral, specific description",
            before: "The shocking decision outraged residents.",
            after: "The council voted 5-2 to close the library; 40 residents spoke against it.",
            evidence_key: Some("loaded_words"),
        },
        Criterion::SourceQuality => Template {
            action: "Name your sources and give their credentials",
            before: "Sources say the plan will fail.",
            after: "According to Maria Lopez, the city's budget director, \
                    the plan is $2 million short.",
            evidence_key: Some("weak_attributions"),
        },
        Criterion::FactualAccuracy => Template {
            action: "Support claims with specific figures and dates",
            before: "Many people lost their jobs recently.",
            after: "The plant cut 240 jobs on March 3, according to company filings.",
            evidence_key: Some("vague_claims"),
        },
        Criterion::WritingClarity => Template {
            action: "Shorten sentences and prefer the active voice",
            before: "The budget was approved by the council after a lengthy debate \
                     that was held on Tuesday.",
            after: "The council approved the budget Tuesday after a long debate.",
            evidence_key: None,
        },
        Criterion::EthicalStandards => Template {
            action: "Remove personal identifiers and include opposing views",
            before: "Smith, a disgrace to the town, refused to answer.",
            after: "Smith declined to comment. Critics of the plan said it ignores renters.",
            evidence_key: Some("inflammatory_words"),
        },
        Criterion::BiasControl => Template {
            action: "Replace absolute claims with measured, attributed statements",
            before: "Everyone knows the policy always fails.",
            after: "Three of the last four pilot programs missed their targets, \
                    according to a state audit.",
            evidence_key: Some("unattributed_opinions"),
        },
        Criterion::StructureFlow => Template {
            action: "Break the text into focused paragraphs behind a 20-50 word lead",
            before: "One long block that covers every point in turn.",
            after: "A 35-word lead with the key facts, then one short paragraph per point.",
            evidence_key: None,
        },
        Criterion::HeadlineQuality => Template {
            action: "Write a specific 8-12 word headline without hype",
            before: "You won't believe what the council did next!",
            after: "City council votes to close downtown library branch",
            evidence_key: None,
        },
    }
}

fn priority(gain: f64) -> Priority {
    if gain >= HIGH_PRIORITY_GAIN {
        Priority::High
    } else if gain >= MEDIUM_PRIORITY_GAIN {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// A sentence from the article to use as the "before" text, when the
/// evidence points at one
fn before_from_article(
    score: &CriterionScore,
    key: Option<&str>,
    parsed: &ParsedStructure,
) -> Option<String> {
    if score.criterion == Criterion::HeadlineQuality {
        return match score.evidence.get("headline") {
            Some(Evidence::Text(t)) if !t.is_empty() => Some(t.clone()),
            _ => None,
        };
    }
    let prefix = format!("{}:", key?);
    let (term, _) = score.terms_with_prefix(&prefix).next()?;
    sentence_containing(parsed, term)
}

pub fn improvement_actions(
    breakdown: &ScoreBreakdown,
    parsed: &ParsedStructure,
    weights: &CriterionWeights,
    weak_threshold: f64,
) -> Vec<ImprovementAction> {
    let mut actions: Vec<ImprovementAction> = breakdown
        .iter()
        .filter(|s| s.score < weak_threshold)
        .map(|s| {
            let t = template(s.criterion);
            let gain = weights.weight(s.criterion) * (100.0 - s.score);
            let gain = (gain * 100.0).round() / 100.0;
            ImprovementAction {
                criterion: s.criterion,
                priority: priority(gain),
                action: t.action.to_string(),
                before: before_from_article(s, t.evidence_key, parsed)
                    .unwrap_or_else(|| t.before.to_string()),
                after: t.after.to_string(),
                potential_gain: gain,
            }
        })
        .collect();
    actions.sort_by(|a, b| b.potential_gain.total_cmp(&a.potential_gain));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::test_support::*;

    #[test]
    fn test_no_actions_when_all_strong() {
        let parsed = ParsedStructure {
            paragraphs: vec![],
            sentences: vec![],
            word_count: 0,
            sentence_count: 0,
            syllable_count: 0,
        };
        let actions =
            improvement_actions(&uniform(85.0), &parsed, &CriterionWeights::default(), 70.0);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_actions_ordered_by_weighted_gain() {
        let parsed = crate::parsers::StructuralParser::default().parse("Text.");
        // source_quality: 0.20 * 60 = 12; headline: 0.05 * 100 = 5; clarity: 0.10 * 50 = 5
        let b = with_score(uniform(90.0), Criterion::SourceQuality, 40.0);
        let b = with_score(b, Criterion::HeadlineQuality, 0.0);
        let b = with_score(b, Criterion::WritingClarity, 50.0);
        let actions = improvement_actions(&b, &parsed, &CriterionWeights::default(), 70.0);
        let order: Vec<Criterion> = actions.iter().map(|a| a.criterion).collect();
        assert_eq!(
            order,
            vec![
                Criterion::SourceQuality,
                Criterion::WritingClarity,
                Criterion::HeadlineQuality
            ]
        );
        assert_eq!(actions[0].priority, Priority::High);
        assert!((actions[0].potential_gain - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_before_text_comes_from_article_when_available() {
        let text = "Officials met Monday. Sources say the deal is off.";
        let parsed = crate::parsers::StructuralParser::default().parse(text);
        let b = with_score(uniform(90.0), Criterion::SourceQuality, 30.0);
        let b = with_evidence(
            b,
            Criterion::SourceQuality,
            "weak_attributions:sources say",
            Evidence::Count(1),
        );
        let actions = improvement_actions(&b, &parsed, &CriterionWeights::default(), 70.0);
        assert_eq!(actions[0].before, "Sources say the deal is off.");
    }

    #[test]
    fn test_priority_bands() {
        assert_eq!(priority(8.0), Priority::High);
        assert_eq!(priority(3.0), Priority::Medium);
        assert_eq!(priority(0.5), Priority::Low);
    }
}

//! Feedback generation
//!
//! Turns a score breakdown into author-facing feedback. Everything here is
//! a deterministic function of the breakdown, the parsed structure, and the
//! configured thresholds:
//!
//! - strengths: criteria at or above their strength threshold
//! - critical issues: criteria below their critical threshold
//! - detailed issues: evidence-backed findings (see [`issues`])
//! - improvement actions: before/after rewrites for weak criteria (see [`actions`])
//! - learning recommendations: curated modules (see [`learning`])

pub mod actions;
pub mod issues;
pub mod learning;

use crate::config::{CriterionWeights, FeedbackConfig};
use crate::models::{
    Criterion, DetailedIssue, ImprovementAction, LearningRecommendation, ScoreBreakdown,
};
use crate::parsers::ParsedStructure;

/// Shown when no criterion reaches its strength threshold
pub const FALLBACK_STRENGTH: &str =
    "The article has enough structure to analyze; the actions below show where to improve";

/// Per-criterion thresholds and summary phrasing
struct CriterionFeedback {
    criterion: Criterion,
    strength_at: f64,
    critical_below: f64,
    strength: &'static str,
    critical: &'static str,
}

const CRITERION_FEEDBACK: [CriterionFeedback; 8] = [
    CriterionFeedback {
        criterion: Criterion::Objectivity,
        strength_at: 90.0,
        critical_below: 60.0,
        strength: "Neutral, objective language throughout",
        critical: "Emotionally loaded language undermines objectivity",
    },
    CriterionFeedback {
        criterion: Criterion::SourceQuality,
        strength_at: 80.0,
        critical_below: 40.0,
        strength: "Claims are backed by named, identifiable sources",
        critical: "Sourcing is weak: few or no named sources",
    },
    CriterionFeedback {
        criterion: Criterion::FactualAccuracy,
        strength_at: 85.0,
        critical_below: 60.0,
        strength: "Specific figures and dates support the reporting",
        critical: "Claims lack specific, verifiable detail",
    },
    CriterionFeedback {
        criterion: Criterion::WritingClarity,
        strength_at: 85.0,
        critical_below: 50.0,
        strength: "Clear, readable prose",
        critical: "Prose is difficult to read",
    },
    CriterionFeedback {
        criterion: Criterion::EthicalStandards,
        strength_at: 85.0,
        critical_below: 60.0,
        strength: "No ethical red flags detected",
        critical: "Ethical concerns: exposed personal data, name-calling, or one-sided coverage",
    },
    CriterionFeedback {
        criterion: Criterion::BiasControl,
        strength_at: 85.0,
        critical_below: 60.0,
        strength: "Balanced framing with little absolute language",
        critical: "Framing shows bias through absolute claims or unattributed opinion",
    },
    CriterionFeedback {
        criterion: Criterion::StructureFlow,
        strength_at: 85.0,
        critical_below: 50.0,
        strength: "Well-organized structure with a focused lead",
        critical: "Article structure is hard to follow",
    },
    CriterionFeedback {
        criterion: Criterion::HeadlineQuality,
        strength_at: 85.0,
        critical_below: 50.0,
        strength: "Headline is informative and well sized",
        critical: "Headline is sensational or poorly sized",
    },
];

/// All feedback sections of a report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub critical_issues: Vec<String>,
    pub detailed_issues: Vec<DetailedIssue>,
    pub improvement_actions: Vec<ImprovementAction>,
    pub learning_recommendations: Vec<LearningRecommendation>,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackGenerator {
    config: FeedbackConfig,
    weights: CriterionWeights,
}

impl FeedbackGenerator {
    pub fn new(config: FeedbackConfig, weights: CriterionWeights) -> Self {
        Self { config, weights }
    }

    pub fn generate(
        &self,
        breakdown: &ScoreBreakdown,
        parsed: &ParsedStructure,
        overall_score: u8,
    ) -> Feedback {
        let weak = weak_criteria(breakdown, self.config.weak_threshold);
        Feedback {
            strengths: strengths(breakdown),
            critical_issues: critical_issues(breakdown),
            detailed_issues: issues::detailed_issues(breakdown, parsed),
            improvement_actions: actions::improvement_actions(
                breakdown,
                parsed,
                &self.weights,
                self.config.weak_threshold,
            ),
            learning_recommendations: learning::recommend(&weak, overall_score, &self.config),
        }
    }
}

pub fn strengths(breakdown: &ScoreBreakdown) -> Vec<String> {
    let found: Vec<String> = CRITERION_FEEDBACK
        .iter()
        .filter(|f| breakdown.score(f.criterion) >= f.strength_at)
        .map(|f| f.strength.to_string())
        .collect();
    if found.is_empty() {
        vec![FALLBACK_STRENGTH.to_string()]
    } else {
        found
    }
}

pub fn critical_issues(breakdown: &ScoreBreakdown) -> Vec<String> {
    CRITERION_FEEDBACK
        .iter()
        .filter(|f| breakdown.score(f.criterion) < f.critical_below)
        .map(|f| f.critical.to_string())
        .collect()
}

/// Criteria scoring below `threshold`, weakest first (ties keep report order)
pub fn weak_criteria(breakdown: &ScoreBreakdown, threshold: f64) -> Vec<Criterion> {
    let mut weak: Vec<(Criterion, f64)> = breakdown
        .iter()
        .filter(|c| c.score < threshold)
        .map(|c| (c.criterion, c.score))
        .collect();
    weak.sort_by(|a, b| a.1.total_cmp(&b.1));
    weak.into_iter().map(|(c, _)| c).collect()
}

//! Criterion scorers
//!
//! One scorer per criterion. Each is a pure function of the article text and
//! its parsed structure; scorers never see each other's results.

mod bias_control;
mod ethical_standards;
mod factual_accuracy;
mod headline_quality;
mod objectivity;
mod source_quality;
mod structure_flow;
mod writing_clarity;

pub use bias_control::BiasControlScorer;
pub use ethical_standards::EthicalStandardsScorer;
pub use factual_accuracy::FactualAccuracyScorer;
pub use headline_quality::HeadlineQualityScorer;
pub use objectivity::ObjectivityScorer;
pub use source_quality::SourceQualityScorer;
pub use structure_flow::StructureFlowScorer;
pub use writing_clarity::WritingClarityScorer;

use crate::models::{Criterion, CriterionScore};
use crate::parsers::ParsedStructure;

/// Everything a scorer may look at
#[derive(Debug, Clone, Copy)]
pub struct ArticleContext<'a> {
    pub text: &'a str,
    pub parsed: &'a ParsedStructure,
}

impl<'a> ArticleContext<'a> {
    pub fn new(text: &'a str, parsed: &'a ParsedStructure) -> Self {
        Self { text, parsed }
    }
}

/// Trait for all criterion scorers
///
/// Implementations hold their compiled rules and must be deterministic:
/// the same context always yields the same score and evidence.
pub trait CriterionScorer: Send + Sync {
    /// Criterion this scorer fills in
    fn criterion(&self) -> Criterion;

    /// Human-readable description of what is measured
    fn description(&self) -> &'static str;

    /// Score the article (0-100, with evidence)
    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore;
}

/// One scorer per criterion, in report order
pub fn default_scorers() -> Vec<Box<dyn CriterionScorer>> {
    vec![
        Box::new(ObjectivityScorer::new()),
        Box::new(SourceQualityScorer::new()),
        Box::new(FactualAccuracyScorer::new()),
        Box::new(WritingClarityScorer::new()),
        Box::new(EthicalStandardsScorer::new()),
        Box::new(BiasControlScorer::new()),
        Box::new(StructureFlowScorer::new()),
        Box::new(HeadlineQualityScorer::new()),
    ]
}

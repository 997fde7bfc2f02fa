//! Scoring engine
//!
//! Runs every registered criterion scorer over one parsed article and
//! assembles the `ScoreBreakdown`.

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{Criterion, ScoreBreakdown};
use crate::parsers::ParsedStructure;
use crate::scoring::criteria::{default_scorers, ArticleContext, CriterionScorer};
use std::collections::BTreeSet;
use tracing::debug;

/// Runs the eight criterion scorers
pub struct ScoringEngine {
    scorers: Vec<Box<dyn CriterionScorer>>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field(
                "scorers",
                &self.scorers.iter().map(|s| s.criterion()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ScoringEngine {
    /// Engine with the built-in scorer for every criterion
    pub fn new() -> Self {
        Self {
            scorers: default_scorers(),
        }
    }

    /// Engine with custom scorers. Exactly one scorer per criterion is
    /// required.
    pub fn with_scorers(scorers: Vec<Box<dyn CriterionScorer>>) -> AnalysisResult<Self> {
        let mut seen = BTreeSet::new();
        for scorer in &scorers {
            if !seen.insert(scorer.criterion()) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "more than one scorer registered for {}",
                    scorer.criterion()
                )));
            }
        }
        if let Some(missing) = Criterion::ALL.iter().find(|c| !seen.contains(*c)) {
            return Err(AnalysisError::InvalidConfig(format!(
                "no scorer registered for {}",
                missing
            )));
        }
        Ok(Self { scorers })
    }

    /// Scorer descriptions in registration order
    pub fn descriptions(&self) -> Vec<(Criterion, &'static str)> {
        self.scorers
            .iter()
            .map(|s| (s.criterion(), s.description()))
            .collect()
    }

    pub fn score(&self, text: &str, parsed: &ParsedStructure) -> ScoreBreakdown {
        let ctx = ArticleContext::new(text, parsed);
        let mut breakdown = ScoreBreakdown::zeroed();
        for scorer in &self.scorers {
            let result = scorer.score(&ctx);
            debug!("{} = {:.1}", result.criterion, result.score);
            breakdown.set(result);
        }
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CriterionScore;
    use crate::parsers::StructuralParser;
    use crate::scoring::criteria::ObjectivityScorer;

    struct FixedScorer(Criterion, f64);

    impl CriterionScorer for FixedScorer {
        fn criterion(&self) -> Criterion {
            self.0
        }

        fn description(&self) -> &'static str {
            "fixed"
        }

        fn score(&self, _ctx: &ArticleContext<'_>) -> CriterionScore {
            CriterionScore {
                criterion: self.0,
                score: self.1,
                evidence: Default::default(),
            }
        }
    }

    #[test]
    fn test_engine_fills_every_criterion() {
        let text = "The council met on Tuesday. It approved the budget.";
        let parsed = StructuralParser::default().parse(text);
        let breakdown = ScoringEngine::new().score(text, &parsed);
        for c in Criterion::ALL {
            assert_eq!(breakdown.get(c).criterion, c);
            let s = breakdown.score(c);
            assert!((0.0..=100.0).contains(&s), "{} out of range: {}", c, s);
        }
    }

    #[test]
    fn test_with_scorers_requires_all_criteria() {
        let err = ScoringEngine::with_scorers(vec![Box::new(ObjectivityScorer::new())]);
        assert!(matches!(err, Err(AnalysisError::InvalidConfig(_))));
    }

    #[test]
    fn test_with_scorers_rejects_duplicates() {
        let mut scorers: Vec<Box<dyn CriterionScorer>> = Criterion::ALL
            .iter()
            .map(|c| Box::new(FixedScorer(*c, 50.0)) as Box<dyn CriterionScorer>)
            .collect();
        scorers.push(Box::new(FixedScorer(Criterion::BiasControl, 10.0)));
        assert!(ScoringEngine::with_scorers(scorers).is_err());
    }

    #[test]
    fn test_custom_scorers_are_used() {
        let scorers = Criterion::ALL
            .iter()
            .map(|c| Box::new(FixedScorer(*c, 42.0)) as Box<dyn CriterionScorer>)
            .collect();
        let engine = ScoringEngine::with_scorers(scorers).expect("all criteria present");
        let parsed = StructuralParser::default().parse("Text.");
        let breakdown = engine.score("Text.", &parsed);
        assert!(breakdown.iter().all(|c| c.score == 42.0));
    }
}

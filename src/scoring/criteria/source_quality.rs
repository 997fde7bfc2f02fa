//! Source quality: named attributions raise the score, vague attributions
//! lower it.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore, Evidence};
use crate::scoring::lexicon::{NAMED_ATTRIBUTION_PATTERNS, WEAK_ATTRIBUTIONS};
use crate::scoring::rules::{tiered_bonus, ScoreBuilder, TermRule};

const BASELINE: f64 = 50.0;
/// (minimum named sources, bonus), highest first
const NAMED_SOURCE_TIERS: [(usize, f64); 3] = [(3, 40.0), (2, 25.0), (1, 10.0)];
const NO_NAMED_SOURCE_PENALTY: f64 = -15.0;
const WEAK_ATTRIBUTION_PENALTY: f64 = -5.0;

pub struct SourceQualityScorer {
    named: TermRule,
    weak: TermRule,
}

impl SourceQualityScorer {
    pub fn new() -> Self {
        Self {
            named: TermRule::patterns("named_sources", NAMED_ATTRIBUTION_PATTERNS),
            weak: TermRule::words("weak_attributions", WEAK_ATTRIBUTIONS),
        }
    }
}

impl Default for SourceQualityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for SourceQualityScorer {
    fn criterion(&self) -> Criterion {
        Criterion::SourceQuality
    }

    fn description(&self) -> &'static str {
        "Rewards named attributions and penalizes anonymous sourcing"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let mut builder = ScoreBuilder::new(Criterion::SourceQuality, BASELINE);

        let named = builder.tally(&self.named, ctx.text);
        if named == 0 {
            builder.adjust(NO_NAMED_SOURCE_PENALTY);
        } else {
            builder.adjust(tiered_bonus(named, &NAMED_SOURCE_TIERS));
        }
        builder.record("has_named_sources", Evidence::Flag(named > 0));

        builder.apply(&self.weak, ctx.text, WEAK_ATTRIBUTION_PENALTY);
        builder.finish()
    }
}

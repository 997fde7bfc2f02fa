//! Structure & flow: paragraph count and lead length.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore, Evidence};
use crate::scoring::rules::ScoreBuilder;

const BASELINE: f64 = 70.0;
const SINGLE_BLOCK_PENALTY: f64 = -20.0;
const IDEAL_LEAD_BONUS: f64 = 10.0;
const LONG_LEAD_PENALTY: f64 = -10.0;
const IDEAL_LEAD_WORDS: std::ops::RangeInclusive<usize> = 20..=50;
const MAX_LEAD_WORDS: usize = 80;

/// Bonus for paragraph count: 4-8 is ideal, 3 or 9-10 acceptable, and
/// more than 10 still shows deliberate structure.
fn paragraph_adjustment(paragraphs: usize) -> f64 {
    match paragraphs {
        0 | 1 => SINGLE_BLOCK_PENALTY,
        2 => 0.0,
        4..=8 => 15.0,
        // 3, 9-10, and >10
        _ => 10.0,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StructureFlowScorer;

impl StructureFlowScorer {
    pub fn new() -> Self {
        Self
    }
}

impl CriterionScorer for StructureFlowScorer {
    fn criterion(&self) -> Criterion {
        Criterion::StructureFlow
    }

    fn description(&self) -> &'static str {
        "Rewards clear paragraphing and a concise lead"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let paragraphs = ctx.parsed.paragraph_count();
        let lead_words = ctx.parsed.lead_word_count();

        let mut builder = ScoreBuilder::new(Criterion::StructureFlow, BASELINE);
        builder.adjust(paragraph_adjustment(paragraphs));

        let ideal_lead = IDEAL_LEAD_WORDS.contains(&lead_words);
        if ideal_lead {
            builder.adjust(IDEAL_LEAD_BONUS);
        } else if lead_words > MAX_LEAD_WORDS {
            builder.adjust(LONG_LEAD_PENALTY);
        }

        builder.record("paragraph_count", Evidence::Count(paragraphs));
        builder.record("lead_words", Evidence::Count(lead_words));
        builder.record("ideal_lead", Evidence::Flag(ideal_lead));
        builder.record("long_lead", Evidence::Flag(lead_words > MAX_LEAD_WORDS));
        builder.finish()
    }
}

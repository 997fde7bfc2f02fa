//! Factual accuracy: concrete numbers and dates raise the score; vague
//! claims and weasel words lower it.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore, Evidence};
use crate::scoring::lexicon::{DATA_PATTERNS, DATE_PATTERNS, VAGUE_CLAIMS, WEASEL_WORDS};
use crate::scoring::rules::{tiered_bonus, ScoreBuilder, TermRule};

const BASELINE: f64 = 75.0;
const DATA_TIERS: [(usize, f64); 3] = [(5, 15.0), (3, 10.0), (1, 5.0)];
const DATE_BONUS: f64 = 5.0;
const VAGUE_CLAIM_PENALTY: f64 = -3.0;
const WEASEL_WORD_PENALTY: f64 = -5.0;

pub struct FactualAccuracyScorer {
    data: TermRule,
    dates: TermRule,
    vague: TermRule,
    weasel: TermRule,
}

impl FactualAccuracyScorer {
    pub fn new() -> Self {
        Self {
            data: TermRule::patterns("data_points", DATA_PATTERNS),
            dates: TermRule::patterns("dates", DATE_PATTERNS),
            vague: TermRule::words("vague_claims", VAGUE_CLAIMS),
            weasel: TermRule::words("weasel_words", WEASEL_WORDS),
        }
    }
}

impl Default for FactualAccuracyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for FactualAccuracyScorer {
    fn criterion(&self) -> Criterion {
        Criterion::FactualAccuracy
    }

    fn description(&self) -> &'static str {
        "Rewards specific figures and dates, penalizes vague and hedged claims"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let mut builder = ScoreBuilder::new(Criterion::FactualAccuracy, BASELINE);

        let data = builder.tally(&self.data, ctx.text);
        builder.adjust(tiered_bonus(data, &DATA_TIERS));

        let has_date = builder.tally(&self.dates, ctx.text) > 0;
        if has_date {
            builder.adjust(DATE_BONUS);
        }
        builder.record("has_date", Evidence::Flag(has_date));

        builder.apply(&self.vague, ctx.text, VAGUE_CLAIM_PENALTY);
        builder.apply(&self.weasel, ctx.text, WEASEL_WORD_PENALTY);
        builder.finish()
    }
}

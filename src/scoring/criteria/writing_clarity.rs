//! Writing clarity: Flesch Reading Ease mapped onto 0-100, minus a
//! deduction for heavy passive-voice use.
//!
//! Mapping (F = reading ease):
//!
//! | F        | score               |
//! |----------|---------------------|
//! | >= 60    | 85 + (F - 60) * 0.375 |
//! | 30 - 60  | 60 + (F - 30)       |
//! | < 30     | 2 * F               |

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore, Evidence};
use crate::scoring::lexicon::PASSIVE_PATTERNS;
use crate::scoring::rules::{ScoreBuilder, TermRule};

const HEAVY_PASSIVE: usize = 5;
const MODERATE_PASSIVE: usize = 3;

/// Map reading ease (0-100) onto a clarity score (0-100)
pub fn readability_to_score(flesch: f64) -> f64 {
    let f = flesch.clamp(0.0, 100.0);
    if f >= 60.0 {
        85.0 + (f - 60.0) * 0.375
    } else if f >= 30.0 {
        60.0 + (f - 30.0)
    } else {
        2.0 * f
    }
}

pub struct WritingClarityScorer {
    passive: TermRule,
}

impl WritingClarityScorer {
    pub fn new() -> Self {
        Self {
            passive: TermRule::patterns("passive_voice", PASSIVE_PATTERNS),
        }
    }
}

impl Default for WritingClarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for WritingClarityScorer {
    fn criterion(&self) -> Criterion {
        Criterion::WritingClarity
    }

    fn description(&self) -> &'static str {
        "Maps Flesch Reading Ease onto a score and penalizes heavy passive voice"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let flesch = ctx.parsed.flesch_reading_ease();
        let mut builder =
            ScoreBuilder::new(Criterion::WritingClarity, readability_to_score(flesch));
        builder.record("flesch_reading_ease", Evidence::Metric(round1(flesch)));
        builder.record(
            "avg_sentence_length",
            Evidence::Metric(round1(ctx.parsed.avg_sentence_length())),
        );
        builder.record(
            "syllables_per_word",
            Evidence::Metric(round2(ctx.parsed.syllables_per_word())),
        );

        let passive = builder.tally(&self.passive, ctx.text);
        if passive > HEAVY_PASSIVE {
            builder.adjust(-10.0);
        } else if passive > MODERATE_PASSIVE {
            builder.adjust(-5.0);
        }
        builder.finish()
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

//! Headline quality. The first sentence stands in for the headline.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore, Evidence};
use crate::scoring::lexicon::{CLICKBAIT_PATTERNS, LOADED_WORDS};
use crate::scoring::rules::{ScoreBuilder, TermRule};

const BASELINE: f64 = 75.0;
const LOADED_WORD_PENALTY: f64 = -5.0;
const CLICKBAIT_PENALTY: f64 = -15.0;

fn length_adjustment(words: usize) -> f64 {
    match words {
        8..=12 => 15.0,
        6..=15 => 5.0,
        21.. => -10.0,
        _ => 0.0,
    }
}

pub struct HeadlineQualityScorer {
    loaded: TermRule,
    clickbait: TermRule,
}

impl HeadlineQualityScorer {
    pub fn new() -> Self {
        Self {
            loaded: TermRule::words("headline_loaded_words", LOADED_WORDS),
            clickbait: TermRule::patterns("clickbait", CLICKBAIT_PATTERNS),
        }
    }
}

impl Default for HeadlineQualityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for HeadlineQualityScorer {
    fn criterion(&self) -> Criterion {
        Criterion::HeadlineQuality
    }

    fn description(&self) -> &'static str {
        "Checks headline length, loaded wording, and clickbait phrasing"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let headline = ctx.parsed.first_sentence().unwrap_or("");
        let words = headline.split_whitespace().count();

        let mut builder = ScoreBuilder::new(Criterion::HeadlineQuality, BASELINE);
        builder.adjust(length_adjustment(words));
        builder.record("headline", Evidence::Text(headline.to_string()));
        builder.record("headline_words", Evidence::Count(words));

        builder.apply(&self.loaded, headline, LOADED_WORD_PENALTY);
        builder.apply(&self.clickbait, headline, CLICKBAIT_PENALTY);
        builder.finish()
    }
}

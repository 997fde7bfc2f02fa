//! Objectivity: emotionally loaded vocabulary, opinion adverbs, and
//! exclamation marks each pull the score down from 100.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore};
use crate::scoring::lexicon::{LOADED_WORDS, OPINION_WORDS};
use crate::scoring::rules::{ScoreBuilder, TermRule};

const BASELINE: f64 = 100.0;
const LOADED_WORD_PENALTY: f64 = -3.0;
const OPINION_WORD_PENALTY: f64 = -2.0;
const EXCLAMATION_PENALTY: f64 = -5.0;

pub struct ObjectivityScorer {
    loaded: TermRule,
    opinion: TermRule,
    exclamation: TermRule,
}

impl ObjectivityScorer {
    pub fn new() -> Self {
        Self {
            loaded: TermRule::words("loaded_words", LOADED_WORDS),
            opinion: TermRule::words("opinion_words", OPINION_WORDS),
            exclamation: TermRule::patterns("exclamations", &[("!", "!")]),
        }
    }
}

impl Default for ObjectivityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for ObjectivityScorer {
    fn criterion(&self) -> Criterion {
        Criterion::Objectivity
    }

    fn description(&self) -> &'static str {
        "Penalizes loaded language, opinion adverbs, and exclamation marks"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let mut builder = ScoreBuilder::new(Criterion::Objectivity, BASELINE);
        builder.apply(&self.loaded, ctx.text, LOADED_WORD_PENALTY);
        builder.apply(&self.opinion, ctx.text, OPINION_WORD_PENALTY);
        builder.apply(&self.exclamation, ctx.text, EXCLAMATION_PENALTY);
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::criteria::test_support::score_text;

    const NEUTRAL: &str = "The council approved the budget on Tuesday. \
        The plan funds two parks and a library.";

    #[test]
    fn test_neutral_text_scores_full() {
        let score = score_text(&ObjectivityScorer::new(), NEUTRAL);
        assert_eq!(score.score, 100.0);
        assert_eq!(score.count("loaded_words"), 0);
    }

    #[test]
    fn test_each_loaded_word_costs_three_points() {
        let text = format!("{} The shocking vote was a shocking, stunning result.", NEUTRAL);
        let score = score_text(&ObjectivityScorer::new(), &text);
        assert_eq!(score.count("loaded_words"), 3);
        assert_eq!(score.count("loaded_words:shocking"), 2);
        assert_eq!(score.score, 91.0);
    }

    #[test]
    fn test_opinion_words_and_exclamations() {
        let text = "This is clearly wrong! Obviously the plan fails!";
        let score = score_text(&ObjectivityScorer::new(), text);
        assert_eq!(score.count("opinion_words"), 2);
        assert_eq!(score.count("exclamations"), 2);
        assert_eq!(score.score, 100.0 - 4.0 - 10.0);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let text = "Shocking! ".repeat(30);
        let score = score_text(&ObjectivityScorer::new(), &text);
        assert_eq!(score.score, 0.0);
    }
}

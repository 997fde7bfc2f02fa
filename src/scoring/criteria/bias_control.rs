//! Bias control: totalizing language and opinions stated as fact.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore};
use crate::scoring::lexicon::{ABSOLUTE_WORDS, UNATTRIBUTED_OPINIONS};
use crate::scoring::rules::{ScoreBuilder, TermRule};

const BASELINE: f64 = 90.0;
const ABSOLUTE_WORD_PENALTY: f64 = -2.0;
const UNATTRIBUTED_OPINION_PENALTY: f64 = -5.0;

pub struct BiasControlScorer {
    absolutes: TermRule,
    opinions: TermRule,
}

impl BiasControlScorer {
    pub fn new() -> Self {
        Self {
            absolutes: TermRule::words("absolute_words", ABSOLUTE_WORDS),
            opinions: TermRule::words("unattributed_opinions", UNATTRIBUTED_OPINIONS),
        }
    }
}

impl Default for BiasControlScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for BiasControlScorer {
    fn criterion(&self) -> Criterion {
        Criterion::BiasControl
    }

    fn description(&self) -> &'static str {
        "Penalizes absolute language and unattributed opinion"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let mut builder = ScoreBuilder::new(Criterion::BiasControl, BASELINE);
        builder.apply(&self.absolutes, ctx.text, ABSOLUTE_WORD_PENALTY);
        builder.apply(&self.opinions, ctx.text, UNATTRIBUTED_OPINION_PENALTY);
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::criteria::test_support::score_text;

    #[test]
    fn test_neutral_text() {
        let score = score_text(&BiasControlScorer::new(), "The board voted five to two.");
        assert_eq!(score.score, 90.0);
    }

    #[test]
    fn test_absolutes_match_whole_words_only() {
        let text = "Everyone agrees the mayor always lies. Overall, the tally was small.";
        let score = score_text(&BiasControlScorer::new(), text);
        assert_eq!(score.count("absolute_words"), 2);
        assert_eq!(score.count("absolute_words:all"), 0);
        assert_eq!(score.score, 86.0);
    }

    #[test]
    fn test_unattributed_opinions() {
        let text = "It is clear the plan failed. Of course, nobody was surprised.";
        let score = score_text(&BiasControlScorer::new(), text);
        assert_eq!(score.count("unattributed_opinions"), 2);
        assert_eq!(score.count("absolute_words"), 1);
        assert_eq!(score.score, 90.0 - 10.0 - 2.0);
    }
}

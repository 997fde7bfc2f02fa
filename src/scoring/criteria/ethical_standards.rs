//! Ethical standards: exposed personal data, one-sided long pieces, and
//! name-calling.

use super::{ArticleContext, CriterionScorer};
use crate::models::{Criterion, CriterionScore, Evidence};
use crate::scoring::lexicon::{BALANCE_INDICATORS, INFLAMMATORY_WORDS, PRIVACY_PATTERNS};
use crate::scoring::rules::{ScoreBuilder, TermRule};

const BASELINE: f64 = 85.0;
const PRIVACY_PENALTY: f64 = -20.0;
const UNBALANCED_PENALTY: f64 = -10.0;
const INFLAMMATORY_PENALTY: f64 = -3.0;
/// Pieces at or below this length are not expected to show both sides
const BALANCE_MIN_WORDS: usize = 200;

pub struct EthicalStandardsScorer {
    privacy: TermRule,
    balance: TermRule,
    inflammatory: TermRule,
}

impl EthicalStandardsScorer {
    pub fn new() -> Self {
        Self {
            privacy: TermRule::patterns("privacy_violations", PRIVACY_PATTERNS),
            balance: TermRule::words("balance_indicators", BALANCE_INDICATORS),
            inflammatory: TermRule::words("inflammatory_words", INFLAMMATORY_WORDS),
        }
    }
}

impl Default for EthicalStandardsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionScorer for EthicalStandardsScorer {
    fn criterion(&self) -> Criterion {
        Criterion::EthicalStandards
    }

    fn description(&self) -> &'static str {
        "Penalizes exposed personal data, missing counterpoints, and name-calling"
    }

    fn score(&self, ctx: &ArticleContext<'_>) -> CriterionScore {
        let mut builder = ScoreBuilder::new(Criterion::EthicalStandards, BASELINE);
        builder.apply(&self.privacy, ctx.text, PRIVACY_PENALTY);

        let balanced = builder.tally(&self.balance, ctx.text) > 0;
        let needs_balance = ctx.parsed.word_count > BALANCE_MIN_WORDS;
        if needs_balance && !balanced {
            builder.adjust(UNBALANCED_PENALTY);
        }
        builder.record("has_balance", Evidence::Flag(balanced));
        builder.record("missing_balance", Evidence::Flag(needs_balance && !balanced));

        builder.apply(&self.inflammatory, ctx.text, INFLAMMATORY_PENALTY);
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::criteria::test_support::score_text;

    #[test]
    fn test_short_clean_text_keeps_baseline() {
        let score = score_text(&EthicalStandardsScorer::new(), "The council met on Tuesday.");
        assert_eq!(score.score, 85.0);
        assert!(!score.flag("missing_balance"));
    }

    #[test]
    fn test_privacy_patterns() {
        let text = "His number is 123-45-6789 and his account is 4111 1111 1111 1111.";
        let score = score_text(&EthicalStandardsScorer::new(), text);
        assert_eq!(score.count("privacy_violations:ssn"), 1);
        assert_eq!(score.count("privacy_violations:card_number"), 1);
        assert_eq!(score.score, 45.0);
    }

    #[test]
    fn test_long_one_sided_piece_penalized() {
        let text = "The plan will help the town grow. ".repeat(30);
        let score = score_text(&EthicalStandardsScorer::new(), &text);
        assert!(score.flag("missing_balance"));
        assert_eq!(score.score, 75.0);

        let balanced = format!("{} Critics disagree.", text);
        let score = score_text(&EthicalStandardsScorer::new(), &balanced);
        assert!(score.flag("has_balance"));
        assert_eq!(score.score, 85.0);
    }

    #[test]
    fn test_inflammatory_words() {
        let score = score_text(
            &EthicalStandardsScorer::new(),
            "The thug and the idiot were called pathetic.",
        );
        assert_eq!(score.count("inflammatory_words"), 3);
        assert_eq!(score.score, 76.0);
    }
}

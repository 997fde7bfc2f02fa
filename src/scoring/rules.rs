//! Data-driven scoring rules
//!
//! A criterion score is a baseline plus a sequence of adjustments. Each
//! adjustment comes from a `TermRule` (a named family of whole-word terms or
//! regex patterns) or from a structural threshold. `ScoreBuilder` applies
//! rules, records what matched as evidence, and clamps the result.

use crate::models::{Criterion, CriterionScore, Evidence};
use regex::Regex;
use std::collections::BTreeMap;

/// A named family of matchable terms.
///
/// Terms are compiled once when the scorer is built. A pattern that fails
/// to compile is a programming error in the lexicon tables.
#[derive(Debug, Clone)]
pub struct TermRule {
    key: &'static str,
    terms: Vec<(String, Regex)>,
}

impl TermRule {
    /// Whole-word, case-insensitive match for each term. Multi-word terms
    /// tolerate any run of whitespace between words.
    pub fn words(key: &'static str, terms: &[&str]) -> Self {
        let terms = terms
            .iter()
            .map(|term| {
                let body = term
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+");
                let re = Regex::new(&format!(r"(?i)\b{}\b", body))
                    .unwrap_or_else(|e| panic!("invalid term '{}' in {}: {}", term, key, e));
                (term.to_string(), re)
            })
            .collect();
        Self { key, terms }
    }

    /// Labelled regex patterns, used as-is
    pub fn patterns(key: &'static str, patterns: &[(&str, &str)]) -> Self {
        let terms = patterns
            .iter()
            .map(|(label, pattern)| {
                let re = Regex::new(pattern)
                    .unwrap_or_else(|e| panic!("invalid pattern '{}' in {}: {}", label, key, e));
                (label.to_string(), re)
            })
            .collect();
        Self { key, terms }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Non-overlapping match counts per term (terms with no match omitted)
    pub fn tally(&self, text: &str) -> BTreeMap<String, usize> {
        self.terms
            .iter()
            .filter_map(|(term, re)| {
                let n = re.find_iter(text).count();
                (n > 0).then(|| (term.clone(), n))
            })
            .collect()
    }

    /// Total matches across all terms
    pub fn count(&self, text: &str) -> usize {
        self.terms.iter().map(|(_, re)| re.find_iter(text).count()).sum()
    }

    /// First matched span, for issue examples
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.terms
            .iter()
            .filter_map(|(_, re)| re.find(text))
            .min_by_key(|m| m.start())
            .map(|m| m.as_str())
    }
}

/// Accumulates a criterion score and its evidence
#[derive(Debug, Clone)]
pub struct ScoreBuilder {
    criterion: Criterion,
    score: f64,
    evidence: BTreeMap<String, Evidence>,
}

impl ScoreBuilder {
    pub fn new(criterion: Criterion, baseline: f64) -> Self {
        Self {
            criterion,
            score: baseline,
            evidence: BTreeMap::new(),
        }
    }

    /// Count matches of `rule`, record them, and return the total without
    /// touching the score.
    ///
    /// Evidence: `"<key>"` holds the total and `"<key>:<term>"` each term.
    pub fn tally(&mut self, rule: &TermRule, text: &str) -> usize {
        let per_term = rule.tally(text);
        let total: usize = per_term.values().sum();
        for (term, n) in per_term {
            self.evidence
                .insert(format!("{}:{}", rule.key(), term), Evidence::Count(n));
        }
        self.evidence
            .insert(rule.key().to_string(), Evidence::Count(total));
        total
    }

    /// Tally `rule` and move the score by `points_each` per match
    pub fn apply(&mut self, rule: &TermRule, text: &str, points_each: f64) -> usize {
        let total = self.tally(rule, text);
        self.score += points_each * total as f64;
        total
    }

    pub fn adjust(&mut self, points: f64) {
        self.score += points;
    }

    pub fn record(&mut self, key: &str, value: Evidence) {
        self.evidence.insert(key.to_string(), value);
    }

    /// Current unclamped score
    pub fn current(&self) -> f64 {
        self.score
    }

    /// Clamp to 0-100 and produce the criterion score
    pub fn finish(self) -> CriterionScore {
        let score = if self.score.is_finite() {
            self.score.clamp(0.0, 100.0)
        } else {
            0.0
        };
        CriterionScore {
            criterion: self.criterion,
            score,
            evidence: self.evidence,
        }
    }
}

/// Bonus for the first tier whose minimum is met.
///
/// `tiers` is ordered from the highest minimum down.
pub fn tiered_bonus(count: usize, tiers: &[(usize, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(min, _)| count >= *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_match_whole_words_case_insensitive() {
        let rule = TermRule::words("loaded_words", &["shocking", "chaos"]);
        let text = "Shocking news. Chaos followed, but not chaotic SHOCKING-ly.";
        let tally = rule.tally(text);
        assert_eq!(tally.get("shocking"), Some(&2));
        assert_eq!(tally.get("chaos"), Some(&1));
        assert_eq!(rule.count(text), 3);
    }

    #[test]
    fn test_multi_word_terms_span_whitespace() {
        let rule = TermRule::words("weak", &["sources say"]);
        assert_eq!(rule.count("Sources  say the deal\nis off; sources\nsay more."), 2);
        assert_eq!(rule.count("resources say"), 0);
    }

    #[test]
    fn test_builder_records_evidence_and_clamps() {
        let rule = TermRule::words("loaded_words", &["shocking"]);
        let mut builder = ScoreBuilder::new(Criterion::Objectivity, 10.0);
        let n = builder.apply(&rule, "shocking shocking shocking shocking", -3.0);
        assert_eq!(n, 4);
        let score = builder.finish();
        assert_eq!(score.score, 0.0);
        assert_eq!(score.count("loaded_words"), 4);
        assert_eq!(score.count("loaded_words:shocking"), 4);
    }

    #[test]
    fn test_tally_without_matches_records_zero_total() {
        let rule = TermRule::patterns("privacy", &[("ssn", r"\b\d{3}-\d{2}-\d{4}\b")]);
        let mut builder = ScoreBuilder::new(Criterion::EthicalStandards, 85.0);
        assert_eq!(builder.tally(&rule, "nothing here"), 0);
        let score = builder.finish();
        assert_eq!(score.score, 85.0);
        assert_eq!(score.evidence.get("privacy"), Some(&Evidence::Count(0)));
    }

    #[test]
    fn test_first_match_is_earliest() {
        let rule = TermRule::words("opinion", &["surely", "clearly"]);
        assert_eq!(rule.first_match("It is clearly and surely so"), Some("clearly"));
        assert_eq!(rule.first_match("neutral"), None);
    }

    #[test]
    fn test_tiered_bonus() {
        let tiers = [(3, 40.0), (2, 25.0), (1, 10.0)];
        assert_eq!(tiered_bonus(0, &tiers), 0.0);
        assert_eq!(tiered_bonus(1, &tiers), 10.0);
        assert_eq!(tiered_bonus(2, &tiers), 25.0);
        assert_eq!(tiered_bonus(7, &tiers), 40.0);
    }
}

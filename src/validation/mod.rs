//! Input validation (garbage gate)
//!
//! Runs a fixed, ordered battery of checks over raw text before any scoring
//! happens. The first check that fires decides the verdict, so the order
//! below is part of the contract:
//!
//! | # | Check                      | Score |
//! |---|----------------------------|-------|
//! | 1 | too short                  | 5     |
//! | 2 | excessive repetition       | 10    |
//! | 3 | no function words          | 15    |
//! | 4 | gibberish-word ratio       | 10    |
//! | 5 | degenerate sentences       | 15    |
//! | 6 | ALL CAPS / no capitals     | 20    |
//! | 7 | no sentence punctuation    | 25    |
//! | 8 | URL spam                   | 20    |
//! | 9 | non-alphabetic content     | 15    |
//! | 10| no journalistic indicators | 15    |

use crate::config::GarbageThresholds;
use crate::error::{AnalysisError, AnalysisResult};
use crate::parsers::{split_paragraphs, HeuristicSegmenter, SentenceSegmenter};
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Function words whose total absence signals non-English or gibberish text
const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "in", "on", "at", "to", "for", "of", "and",
    "or", "but",
];

static CONSONANT_RUN: OnceLock<Regex> = OnceLock::new();
static URL_TOKEN: OnceLock<Regex> = OnceLock::new();
static ATTRIBUTION_VERB: OnceLock<Regex> = OnceLock::new();
static PROPER_NAME: OnceLock<Regex> = OnceLock::new();

fn consonant_run() -> &'static Regex {
    CONSONANT_RUN
        .get_or_init(|| Regex::new(r"[bcdfghjklmnpqrstvwxz]{5,}").expect("valid consonant regex"))
}

fn url_token() -> &'static Regex {
    URL_TOKEN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid url regex")
    })
}

fn attribution_verb() -> &'static Regex {
    ATTRIBUTION_VERB.get_or_init(|| {
        Regex::new(r"(?i)\b(?:said|according|reported|stated|announced)\b")
            .expect("valid attribution regex")
    })
}

fn proper_name() -> &'static Regex {
    PROPER_NAME
        .get_or_init(|| Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").expect("valid name regex"))
}

fn function_words() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| FUNCTION_WORDS.iter().copied().collect())
}

/// The check that rejected an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarbageCheck {
    TooShort,
    ExcessiveRepetition,
    NoFunctionWords,
    GibberishWords,
    DegenerateSentences,
    AllCaps,
    NoCapitalization,
    NoPunctuation,
    UrlSpam,
    NonAlphabetic,
    NoJournalisticIndicators,
}

impl GarbageCheck {
    /// Fixed score assigned when this check fires
    pub fn score(&self) -> u8 {
        match self {
            GarbageCheck::TooShort => 5,
            GarbageCheck::ExcessiveRepetition => 10,
            GarbageCheck::NoFunctionWords => 15,
            GarbageCheck::GibberishWords => 10,
            GarbageCheck::DegenerateSentences => 15,
            GarbageCheck::AllCaps => 20,
            GarbageCheck::NoCapitalization => 20,
            GarbageCheck::NoPunctuation => 25,
            GarbageCheck::UrlSpam => 20,
            GarbageCheck::NonAlphabetic => 15,
            GarbageCheck::NoJournalisticIndicators => 15,
        }
    }

    /// Human-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            GarbageCheck::TooShort => "Text too short to analyze",
            GarbageCheck::ExcessiveRepetition => "Text has excessive repetition of words",
            GarbageCheck::NoFunctionWords => "Text appears to be gibberish/non-English",
            GarbageCheck::GibberishWords => "Text contains too many gibberish words",
            GarbageCheck::DegenerateSentences => "Degenerate sentence structure",
            GarbageCheck::AllCaps => "Text is written in ALL CAPS",
            GarbageCheck::NoCapitalization => "Text lacks normal capitalization",
            GarbageCheck::NoPunctuation => "Text has no sentence punctuation",
            GarbageCheck::UrlSpam => "Text contains too many URLs (likely spam)",
            GarbageCheck::NonAlphabetic => "Text is mostly non-alphabetic characters",
            GarbageCheck::NoJournalisticIndicators => {
                "Text has no journalistic indicators and contains gibberish"
            }
        }
    }
}

/// Outcome of the garbage gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarbageVerdict {
    pub is_garbage: bool,
    /// Fixed low score (0 when not garbage)
    pub score: u8,
    /// Reason for rejection (empty when not garbage)
    pub reason: String,
    #[serde(default)]
    pub check: Option<GarbageCheck>,
}

impl GarbageVerdict {
    pub fn clean() -> Self {
        Self {
            is_garbage: false,
            score: 0,
            reason: String::new(),
            check: None,
        }
    }

    pub fn rejected(check: GarbageCheck) -> Self {
        Self {
            is_garbage: true,
            score: check.score(),
            reason: check.reason().to_string(),
            check: Some(check),
        }
    }
}

/// Surface measurements of raw text, shared by the checks
struct TextSignals {
    word_count: usize,
    unique_words: usize,
    has_function_word: bool,
    gibberish_count: usize,
    sentence_count: usize,
    uppercase_chars: usize,
    lowercase_chars: usize,
    alpha_chars: usize,
    total_chars: usize,
    has_terminal_punctuation: bool,
    url_count: usize,
}

impl TextSignals {
    fn measure(text: &str) -> Self {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .collect();

        let unique_words = words
            .iter()
            .filter(|w| !w.is_empty())
            .collect::<FxHashSet<_>>()
            .len();
        let has_function_word = words.iter().any(|w| function_words().contains(w.as_str()));
        let gibberish_count = words.iter().filter(|w| is_gibberish_word(w)).count();

        // Same boundary rule as the structural parser, so decimals, URLs and
        // lowercase continuations do not count as sentence breaks
        let sentence_count = split_paragraphs(text)
            .iter()
            .map(|p| HeuristicSegmenter.split(p).len())
            .sum();

        let mut uppercase_chars = 0;
        let mut lowercase_chars = 0;
        let mut alpha_chars = 0;
        let mut total_chars = 0;
        for c in text.chars() {
            total_chars += 1;
            if c.is_alphabetic() {
                alpha_chars += 1;
            }
            if c.is_uppercase() {
                uppercase_chars += 1;
            } else if c.is_lowercase() {
                lowercase_chars += 1;
            }
        }

        Self {
            word_count: words.len(),
            unique_words,
            has_function_word,
            gibberish_count,
            sentence_count,
            uppercase_chars,
            lowercase_chars,
            alpha_chars,
            total_chars,
            has_terminal_punctuation: text.contains(['.', '!', '?']),
            url_count: url_token().find_iter(text).count(),
        }
    }
}

/// A word longer than 3 letters is gibberish when it has a run of 5+
/// consonants, none of `aeiou` (length > 5), or very few distinct
/// characters (length > 8).
pub fn is_gibberish_word(word: &str) -> bool {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    let len = letters.chars().count();
    if len <= 3 {
        return false;
    }
    if consonant_run().is_match(&letters) {
        return true;
    }
    let has_vowel = letters.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
    if len > 5 && !has_vowel {
        return true;
    }
    if len > 8 {
        let distinct = letters.chars().collect::<FxHashSet<_>>().len();
        if (distinct as f64) < 0.4 * len as f64 {
            return true;
        }
    }
    false
}

/// True when the text shows any marker of reported journalism: an
/// attribution verb, quotation marks, or a capitalized two-word name
fn has_professional_indicators(text: &str) -> bool {
    attribution_verb().is_match(text)
        || text.contains(['"', '\u{201C}', '\u{201D}'])
        || proper_name().is_match(text)
}

/// Ordered garbage checks with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct GarbageDetector {
    thresholds: GarbageThresholds,
}

impl GarbageDetector {
    pub fn new(thresholds: GarbageThresholds) -> Self {
        Self { thresholds }
    }

    /// Reject empty input, then run the garbage battery
    pub fn validate(&self, text: &str) -> AnalysisResult<GarbageVerdict> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let verdict = match self.first_failing_check(text) {
            Some(check) => {
                info!("Input rejected by garbage gate: {:?}", check);
                GarbageVerdict::rejected(check)
            }
            None => GarbageVerdict::clean(),
        };
        Ok(verdict)
    }

    /// The first check that fires, in contract order
    pub fn first_failing_check(&self, text: &str) -> Option<GarbageCheck> {
        let t = &self.thresholds;
        let s = TextSignals::measure(text);
        let words = s.word_count;
        debug!(
            "Garbage signals: words={}, unique={}, gibberish={}, sentences={}, urls={}",
            words, s.unique_words, s.gibberish_count, s.sentence_count, s.url_count
        );

        if words < t.min_words {
            return Some(GarbageCheck::TooShort);
        }

        if words > 0 && (s.unique_words as f64) < t.min_unique_ratio * words as f64 {
            return Some(GarbageCheck::ExcessiveRepetition);
        }

        if words > t.function_word_gate && !s.has_function_word {
            return Some(GarbageCheck::NoFunctionWords);
        }

        if s.gibberish_count as f64 > t.max_gibberish_ratio * words as f64 {
            return Some(GarbageCheck::GibberishWords);
        }

        let avg_sentence_words = words as f64 / s.sentence_count.max(1) as f64;
        if words > t.sentence_gate_words && avg_sentence_words < t.min_avg_sentence_words {
            return Some(GarbageCheck::DegenerateSentences);
        }

        if words > t.all_caps_gate_words && s.uppercase_chars > 0 && s.lowercase_chars == 0 {
            return Some(GarbageCheck::AllCaps);
        }
        if words > t.lowercase_gate_words && s.uppercase_chars < t.min_uppercase_chars {
            return Some(GarbageCheck::NoCapitalization);
        }

        if words > t.punctuation_gate_words && !s.has_terminal_punctuation {
            return Some(GarbageCheck::NoPunctuation);
        }

        if s.url_count > t.max_urls {
            return Some(GarbageCheck::UrlSpam);
        }

        if s.total_chars > 0 && (s.alpha_chars as f64) < t.min_alpha_ratio * s.total_chars as f64 {
            return Some(GarbageCheck::NonAlphabetic);
        }

        if words > t.indicator_gate_words
            && s.gibberish_count > t.max_gibberish_without_indicators
            && !has_professional_indicators(text)
        {
            return Some(GarbageCheck::NoJournalisticIndicators);
        }

        None
    }
}

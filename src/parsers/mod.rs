//! Structural parsing of article text
//!
//! Splits raw text into paragraphs, sentences, and words, and counts
//! syllables. Sentence segmentation and syllable counting are pluggable
//! capabilities injected at construction time:
//!
//! - [`SentenceSegmenter`]: `HeuristicSegmenter` (default) or
//!   `AbbreviationAwareSegmenter`
//! - [`SyllableCounter`]: `HeuristicSyllableCounter` (default) or
//!   `PronouncingDictionary` (CMU-format file, heuristic fallback per word)

mod sentences;
mod syllables;

pub use sentences::{AbbreviationAwareSegmenter, HeuristicSegmenter, SentenceSegmenter};
pub use syllables::{HeuristicSyllableCounter, PronouncingDictionary, SyllableCounter};

use crate::config::{LinguisticsConfig, SegmenterKind};
use crate::error::AnalysisResult;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::debug;

static BLANK_LINE: OnceLock<Regex> = OnceLock::new();

fn blank_line() -> &'static Regex {
    BLANK_LINE.get_or_init(|| Regex::new(r"\n[ \t\r]*\n").expect("valid blank-line regex"))
}

/// Parsed structure of one article. Created once per analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStructure {
    /// Paragraphs in document order
    pub paragraphs: Vec<String>,
    /// Sentences in document order (paragraph order preserved)
    pub sentences: Vec<String>,
    /// Whitespace-delimited tokens of the raw text
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
}

impl ParsedStructure {
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Words per sentence (sentence count floored at 1)
    pub fn avg_sentence_length(&self) -> f64 {
        self.word_count as f64 / self.sentence_count.max(1) as f64
    }

    /// Syllables per word (0 for empty text)
    pub fn syllables_per_word(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.syllable_count as f64 / self.word_count as f64
        }
    }

    /// Flesch Reading Ease, clamped to 0-100
    pub fn flesch_reading_ease(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        let score =
            206.835 - 1.015 * self.avg_sentence_length() - 84.6 * self.syllables_per_word();
        score.clamp(0.0, 100.0)
    }

    /// First sentence, used as the headline proxy
    pub fn first_sentence(&self) -> Option<&str> {
        self.sentences.first().map(String::as_str)
    }

    /// Word count of the first paragraph (the lead)
    pub fn lead_word_count(&self) -> usize {
        self.paragraphs
            .first()
            .map(|p| p.split_whitespace().count())
            .unwrap_or(0)
    }
}

/// Splits text into a `ParsedStructure` using the injected capabilities
#[derive(Clone)]
pub struct StructuralParser {
    segmenter: Arc<dyn SentenceSegmenter>,
    syllables: Arc<dyn SyllableCounter>,
}

impl Default for StructuralParser {
    fn default() -> Self {
        Self::new(
            Arc::new(HeuristicSegmenter),
            Arc::new(HeuristicSyllableCounter),
        )
    }
}

impl std::fmt::Debug for StructuralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuralParser")
            .field("segmenter", &self.segmenter.name())
            .field("syllables", &self.syllables.name())
            .finish()
    }
}

impl StructuralParser {
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>, syllables: Arc<dyn SyllableCounter>) -> Self {
        Self {
            segmenter,
            syllables,
        }
    }

    /// Build the parser selected by configuration
    pub fn from_config(config: &LinguisticsConfig) -> AnalysisResult<Self> {
        let segmenter: Arc<dyn SentenceSegmenter> = match config.segmenter {
            SegmenterKind::Heuristic => Arc::new(HeuristicSegmenter),
            SegmenterKind::AbbreviationAware => Arc::new(AbbreviationAwareSegmenter::default()),
        };
        let syllables: Arc<dyn SyllableCounter> = match &config.pronouncing_dictionary {
            Some(path) => Arc::new(PronouncingDictionary::from_path(path)?),
            None => Arc::new(HeuristicSyllableCounter),
        };
        debug!(
            "Structural parser: segmenter={}, syllables={}",
            segmenter.name(),
            syllables.name()
        );
        Ok(Self::new(segmenter, syllables))
    }

    pub fn parse(&self, text: &str) -> ParsedStructure {
        let paragraphs = split_paragraphs(text);
        let sentences: Vec<String> = paragraphs
            .iter()
            .flat_map(|p| self.segmenter.split(p))
            .collect();

        let words: Vec<&str> = text.split_whitespace().collect();
        let syllable_count = words.iter().map(|w| self.syllables.count(w).max(1)).sum();

        ParsedStructure {
            word_count: words.len(),
            sentence_count: sentences.len(),
            syllable_count,
            paragraphs,
            sentences,
        }
    }
}

/// Split on blank lines, falling back to single newlines when there are none
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let pieces: Vec<&str> = if blank_line().is_match(&normalized) {
        blank_line().split(&normalized).collect()
    } else {
        normalized.split('\n').collect()
    };
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_on_blank_lines() {
        let text = "First paragraph line one.\nStill first.\n\nSecond paragraph.\n   \nThird.";
        let paragraphs = split_paragraphs(text);
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[0].contains("Still first."));
    }

    #[test]
    fn test_paragraphs_fallback_to_newlines() {
        let paragraphs = split_paragraphs("One.\nTwo.\nThree.");
        assert_eq!(paragraphs, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_parse_counts() {
        let parser = StructuralParser::default();
        let parsed = parser.parse("The cat sat. The dog ran home.\n\nIt rained today.");
        assert_eq!(parsed.paragraph_count(), 2);
        assert_eq!(parsed.sentence_count, 3);
        assert_eq!(parsed.word_count, 10);
        assert_eq!(parsed.first_sentence(), Some("The cat sat."));
        assert!(parsed.syllable_count >= parsed.word_count);
    }

    #[test]
    fn test_flesch_is_clamped() {
        let parser = StructuralParser::default();
        let simple = parser.parse("I go. We run. He sat.");
        assert!(simple.flesch_reading_ease() <= 100.0);

        let dense = parser.parse(
            "Institutionalization of multidimensional interdisciplinary telecommunications \
             infrastructure notwithstanding, organizational characteristically \
             incomprehensible administrative responsibilities proliferated uncontrollably",
        );
        assert_eq!(dense.flesch_reading_ease(), 0.0);
    }

    #[test]
    fn test_lead_word_count() {
        let parser = StructuralParser::default();
        let parsed = parser.parse("One two three four.\n\nFive six.");
        assert_eq!(parsed.lead_word_count(), 4);
    }

    #[test]
    fn test_parser_from_default_config() {
        let parser = StructuralParser::from_config(&LinguisticsConfig::default())
            .expect("default config builds");
        let parsed = parser.parse("Dr. Smith spoke. Then she left.");
        // Heuristic segmenter splits after "Dr."
        assert_eq!(parsed.sentence_count, 3);
    }

    #[test]
    fn test_parser_abbreviation_aware_config() {
        let config = LinguisticsConfig {
            segmenter: SegmenterKind::AbbreviationAware,
            pronouncing_dictionary: None,
        };
        let parser = StructuralParser::from_config(&config).expect("config builds");
        let parsed = parser.parse("Dr. Smith spoke. Then she left.");
        assert_eq!(parsed.sentence_count, 2);
    }
}

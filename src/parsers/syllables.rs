//! Syllable counting
//!
//! The heuristic counts vowel groups, drops one for a silent final "e",
//! and never returns less than one. `PronouncingDictionary` reads a
//! CMU-format dictionary and counts stressed vowel phonemes, falling back to
//! the heuristic for words it does not know.

use crate::error::{AnalysisError, AnalysisResult};
use rustc_hash::FxHashMap;
use std::path::Path;
use tracing::debug;

/// Capability interface for syllable counting
pub trait SyllableCounter: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Syllables in one whitespace-delimited token (at least 1)
    fn count(&self, word: &str) -> usize;
}

/// Vowel-group heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSyllableCounter;

impl SyllableCounter for HeuristicSyllableCounter {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn count(&self, word: &str) -> usize {
        heuristic_syllables(word)
    }
}

/// Lowercase ASCII letters of a token ("Don't," -> "dont")
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub(crate) fn heuristic_syllables(word: &str) -> usize {
    let word = normalize(word);
    if word.is_empty() {
        return 1;
    }

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    if word.ends_with('e') {
        groups = groups.saturating_sub(1);
    }
    groups.max(1)
}

/// Syllable counts from a CMU-format pronouncing dictionary.
///
/// Each line is `WORD  PH1 PH2 ...`; vowel phonemes carry a stress digit
/// (`AH0`, `EH1`), so the syllable count is the number of phonemes ending in
/// a digit. Alternate pronunciations (`WORD(2)`) are ignored.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    entries: FxHashMap<String, usize>,
}

impl PronouncingDictionary {
    pub fn from_path(path: &Path) -> AnalysisResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Dictionary {
            path: path.display().to_string(),
            source,
        })?;
        let dict = Self::parse(&content);
        debug!(
            "Loaded {} pronunciations from {}",
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    pub fn parse(content: &str) -> Self {
        let mut entries = FxHashMap::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            if word.ends_with(')') {
                continue;
            }
            let syllables = parts
                .filter(|p| p.ends_with(|c: char| c.is_ascii_digit()))
                .count();
            if syllables > 0 {
                entries.entry(word.to_lowercase()).or_insert(syllables);
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dictionary count for a word, if known
    pub fn lookup(&self, word: &str) -> Option<usize> {
        let key: String = word
            .chars()
            .filter(|c| c.is_alphabetic() || *c == '\'')
            .flat_map(char::to_lowercase)
            .collect();
        self.entries.get(key.trim_matches('\'')).copied()
    }
}

impl SyllableCounter for PronouncingDictionary {
    fn name(&self) -> &'static str {
        "pronouncing-dictionary"
    }

    fn count(&self, word: &str) -> usize {
        self.lookup(word)
            .unwrap_or_else(|| heuristic_syllables(word))
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_basic_words() {
        assert_eq!(heuristic_syllables("cat"), 1);
        assert_eq!(heuristic_syllables("water"), 2);
        assert_eq!(heuristic_syllables("beautiful"), 3);
        assert_eq!(heuristic_syllables("reading"), 2);
    }

    #[test]
    fn test_heuristic_silent_e() {
        assert_eq!(heuristic_syllables("make"), 1);
        assert_eq!(heuristic_syllables("the"), 1);
        assert_eq!(heuristic_syllables("compete"), 2);
    }

    #[test]
    fn test_heuristic_floor_and_punctuation() {
        assert_eq!(heuristic_syllables("2024"), 1);
        assert_eq!(heuristic_syllables("--"), 1);
        assert_eq!(heuristic_syllables("Hello,"), 2);
        assert_eq!(heuristic_syllables("rhythm"), 1);
    }

    #[test]
    fn test_dictionary_parse_and_lookup() {
        let dict = PronouncingDictionary::parse(
            ";;; comment line\n\
             TABLE  T EY1 B AH0 L\n\
             TABLE(2)  T EY1 B L\n\
             FIRE  F AY1 ER0\n\
             DON'T  D OW1 N T\n",
        );
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.count("table"), 2);
        assert_eq!(dict.count("Fire."), 2);
        assert_eq!(dict.count("don't"), 1);
    }

    #[test]
    fn test_dictionary_falls_back_to_heuristic() {
        let dict = PronouncingDictionary::parse("CAT  K AE1 T\n");
        assert_eq!(dict.count("water"), heuristic_syllables("water"));
    }

    #[test]
    fn test_dictionary_missing_file() {
        let err = PronouncingDictionary::from_path(Path::new("/nonexistent/cmudict.dict"));
        assert!(matches!(err, Err(AnalysisError::Dictionary { .. })));
    }

    #[test]
    fn test_dictionary_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cmudict.dict");
        std::fs::write(&path, "ELEPHANT  EH1 L AH0 F AH0 N T\n").expect("write dict");
        let dict = PronouncingDictionary::from_path(&path).expect("load dict");
        assert_eq!(dict.count("elephants"), heuristic_syllables("elephants"));
        assert_eq!(dict.count("elephant"), 3);
    }
}

//! Sentence segmentation
//!
//! A sentence boundary is terminal punctuation (`.`, `!`, `?`), optionally
//! followed by closing quotes or brackets, then whitespace, then a capital
//! letter (possibly behind an opening quote).

use rustc_hash::FxHashSet;

/// Capability interface for sentence segmentation
pub trait SentenceSegmenter: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Split one paragraph into sentences, preserving order
    fn split(&self, paragraph: &str) -> Vec<String>;
}

/// Punctuation-plus-capital heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSegmenter;

impl SentenceSegmenter for HeuristicSegmenter {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn split(&self, paragraph: &str) -> Vec<String> {
        split_at_boundaries(paragraph, |_| false)
    }
}

/// Abbreviations that end in a period without ending the sentence
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "mt", "gen", "sen", "rep", "gov", "lt",
    "col", "capt", "sgt", "rev", "hon", "inc", "corp", "ltd", "co", "dept", "univ", "vs", "etc",
    "no", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "u.s", "u.k", "u.n", "e.g", "i.e", "a.m", "p.m", "d.c",
];

/// Heuristic segmenter that refuses to split after honorifics,
/// abbreviations, and single-letter initials
#[derive(Debug, Clone)]
pub struct AbbreviationAwareSegmenter {
    abbreviations: FxHashSet<String>,
}

impl Default for AbbreviationAwareSegmenter {
    fn default() -> Self {
        Self::from_list(DEFAULT_ABBREVIATIONS)
    }
}

impl AbbreviationAwareSegmenter {
    /// Create a segmenter from a custom abbreviation list (without periods
    /// at the end, case-insensitive)
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            abbreviations: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    fn is_abbreviation(&self, before_period: &str) -> bool {
        let token = before_period
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| is_opening(c));
        if token.is_empty() {
            return false;
        }
        // Single initial: "J. Smith"
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_uppercase() {
                return true;
            }
        }
        self.abbreviations.contains(&token.to_lowercase())
    }
}

impl SentenceSegmenter for AbbreviationAwareSegmenter {
    fn name(&self) -> &'static str {
        "abbreviation-aware"
    }

    fn split(&self, paragraph: &str) -> Vec<String> {
        split_at_boundaries(paragraph, |before| self.is_abbreviation(before))
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[')
}

/// Split `text` at sentence boundaries.
///
/// `keep_together` receives the text preceding a period and returns true
/// when that period must not end the sentence.
pub(crate) fn split_at_boundaries(text: &str, keep_together: impl Fn(&str) -> bool) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminal(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
            j += 1;
        }
        let end = chars.get(j).map(|(b, _)| *b).unwrap_or(text.len());

        let mut k = j;
        while k < chars.len() && chars[k].1.is_whitespace() {
            k += 1;
        }

        let next_is_capital = match chars.get(k) {
            Some((_, n)) if n.is_uppercase() => true,
            Some((_, n)) if is_opening(*n) => chars
                .get(k + 1)
                .map(|(_, after)| after.is_uppercase())
                .unwrap_or(false),
            _ => false,
        };

        let abbreviated = c == '.' && keep_together(&text[start..pos]);
        if k > j && next_is_capital && !abbreviated {
            push_trimmed(&mut sentences, &text[start..end]);
            start = chars[k].0;
        }
        i = j;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

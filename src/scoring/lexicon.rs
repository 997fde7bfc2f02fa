//! Fixed lexical tables used by the criterion scorers
//!
//! Word lists match whole words, case-insensitively. Pattern tables are
//! `(label, regex)` pairs; labels become evidence keys.
//!
//! All patterns assume English text with Western name capitalization
//! ("Jane Smith"). Other languages and scripts are not supported.

/// Emotionally loaded vocabulary (objectivity, headline)
pub const LOADED_WORDS: &[&str] = &[
    "shocking",
    "outrageous",
    "devastating",
    "horrific",
    "disgusting",
    "appalling",
    "scandalous",
    "explosive",
    "bombshell",
    "stunning",
    "unbelievable",
    "incredible",
    "terrifying",
    "catastrophic",
    "disastrous",
    "slammed",
    "blasted",
    "destroyed",
    "furious",
    "chaos",
];

/// Opinion adverbs (objectivity)
pub const OPINION_WORDS: &[&str] = &[
    "clearly",
    "obviously",
    "undoubtedly",
    "certainly",
    "definitely",
    "absolutely",
    "surely",
    "unquestionably",
    "arguably",
    "naturally",
];

/// Sourcing that hides who is speaking (source quality)
pub const WEAK_ATTRIBUTIONS: &[&str] = &[
    "sources say",
    "sources said",
    "officials said",
    "experts believe",
    "insiders say",
    "people familiar with",
    "a source close to",
    "anonymous sources",
    "unnamed officials",
    "it is reported",
];

/// Named-attribution families (source quality)
pub const NAMED_ATTRIBUTION_PATTERNS: &[(&str, &str)] = &[
    (
        "according_to_name",
        r"(?i:according to)\s+(?:(?:Dr|Prof|Professor|Mr|Mrs|Ms|Sen|Rep|Gov|Gen|Judge|Chief)\.?\s+)?[A-Z][a-z'-]+(?:\s+[A-Z]\.)?(?:\s+[A-Z][a-z'-]+)+",
    ),
    (
        "quote_then_speaker",
        r#"["\x{201D}]\s+(?:said|says|stated|explained|noted|added|told)\s+(?:(?:Dr|Prof|Mr|Mrs|Ms)\.?\s+)?[A-Z][a-z'-]+(?:\s+[A-Z][a-z'-]+)+"#,
    ),
    (
        "speaker_then_verb",
        r"\b[A-Z][a-z'-]+\s+[A-Z][a-z'-]+,?\s+(?:said|says|stated|explained|noted|added|testified|wrote)\b",
    ),
    (
        "institutional_citation",
        r"\b(?:study|report|survey|research|analysis|data)\s+(?:published|released|conducted|compiled)\s+(?:in|by)\s+(?:the\s+)?[A-Z][A-Za-z]+",
    ),
    (
        "institution_of",
        r"\b(?:University|Institute|Department|Ministry|Agency|Bureau|Centre|Center|Office)\s+of\s+(?:the\s+)?[A-Z][a-z]+",
    ),
];

/// Quantifiable data tokens (factual accuracy)
pub const DATA_PATTERNS: &[(&str, &str)] = &[
    ("percentage", r"\b\d+(?:\.\d+)?\s?(?:%|percent\b)"),
    (
        "currency",
        r"[$\x{20AC}\x{00A3}]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|billion|trillion)\b)?",
    ),
    (
        "magnitude",
        r"\b\d+(?:\.\d+)?\s+(?:thousand|million|billion|trillion)\b",
    ),
    ("grouped_number", r"\b\d{1,3}(?:,\d{3})+\b"),
];

/// Date references (factual accuracy)
pub const DATE_PATTERNS: &[(&str, &str)] = &[
    (
        "month_day",
        r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|March|April|May|June|July|Aug(?:ust)?|Sept?(?:ember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s*\d{4})?\b",
    ),
    ("numeric_date", r"\b\d{1,2}/\d{1,2}/\d{2,4}\b"),
    ("iso_date", r"\b\d{4}-\d{2}-\d{2}\b"),
    ("year", r"(?i)\b(?:in|since|by|during|from|until)\s+(?:19|20)\d{2}\b"),
    (
        "weekday",
        r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b",
    ),
];

/// Appeals to unnamed studies or crowds (factual accuracy)
pub const VAGUE_CLAIMS: &[&str] = &[
    "studies show",
    "studies have shown",
    "research shows",
    "research suggests",
    "experts say",
    "experts agree",
    "scientists say",
    "many people",
    "some people say",
    "many believe",
    "it is widely known",
];

/// Hedges that distance the writer from a claim (factual accuracy)
pub const WEASEL_WORDS: &[&str] = &[
    "reportedly",
    "allegedly",
    "rumored",
    "rumoured",
    "supposedly",
    "purportedly",
    "it is believed",
];

/// Personal data that should never be published (ethical standards)
pub const PRIVACY_PATTERNS: &[(&str, &str)] = &[
    ("ssn", r"\b\d{3}-\d{2}-\d{4}\b"),
    ("card_number", r"\b(?:\d{4}[- ]){3}\d{4}\b"),
    ("long_digit_sequence", r"\b\d{9,}\b"),
];

/// Markers that the piece presents more than one side (ethical standards)
pub const BALANCE_INDICATORS: &[&str] = &[
    "however",
    "but",
    "although",
    "though",
    "critics",
    "opponents",
    "on the other hand",
    "meanwhile",
    "in contrast",
    "nevertheless",
    "disagreed",
    "disputed",
    "countered",
    "argued",
];

/// Name-calling (ethical standards)
pub const INFLAMMATORY_WORDS: &[&str] = &[
    "thug",
    "thugs",
    "monster",
    "evil",
    "idiot",
    "idiotic",
    "disgrace",
    "pathetic",
    "lunatic",
    "vermin",
    "traitor",
    "scum",
];

/// Totalizing words (bias control)
pub const ABSOLUTE_WORDS: &[&str] = &[
    "only",
    "always",
    "never",
    "everyone",
    "everybody",
    "nobody",
    "no one",
    "everything",
    "nothing",
    "all",
    "every",
    "completely",
    "totally",
    "entirely",
];

/// Opinions presented as fact without a source (bias control)
pub const UNATTRIBUTED_OPINIONS: &[&str] = &[
    "it is clear",
    "obviously",
    "it is obvious",
    "there is no doubt",
    "without a doubt",
    "everyone knows",
    "needless to say",
    "of course",
    "it goes without saying",
    "the truth is",
];

/// Passive constructions (writing clarity)
pub const PASSIVE_PATTERNS: &[(&str, &str)] = &[(
    "passive_voice",
    r"(?i)\b(?:am|is|are|was|were|be|been|being)\s+(?:[a-z]+ed|born|built|caught|chosen|done|drawn|driven|found|given|held|hidden|kept|known|led|lost|made|paid|seen|sent|shown|sold|spent|stolen|taken|taught|told|thought|won|written)\b",
)];

/// Clickbait headline phrasing (headline quality)
pub const CLICKBAIT_PATTERNS: &[(&str, &str)] = &[
    ("you_wont_believe", r"(?i)\byou won'?t believe\b"),
    ("what_happened_next", r"(?i)\bwhat happen(?:s|ed)? next\b"),
    ("will_shock_you", r"(?i)\bwill (?:shock|amaze|surprise) you\b"),
    ("one_trick", r"(?i)\bthis one (?:simple |weird )?trick\b"),
    ("doctors_hate", r"(?i)\b(?:doctors|experts) hate\b"),
    ("mind_blowing", r"(?i)\bmind[- ]blowing\b"),
    ("jaw_dropping", r"(?i)\bjaw[- ]dropping\b"),
    ("need_to_know", r"(?i)\byou need to know\b"),
    ("goes_viral", r"(?i)\bgo(?:es)? viral\b"),
    ("blow_your_mind", r"(?i)\bblow your mind\b"),
    ("number_will", r"(?i)\bnumber \d+ will\b"),
    ("heres_why", r"(?i)\bhere'?s why\b"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_list_sizes() {
        assert_eq!(LOADED_WORDS.len(), 20);
        assert_eq!(OPINION_WORDS.len(), 10);
    }

    #[test]
    fn test_all_patterns_compile() {
        for (label, pattern) in NAMED_ATTRIBUTION_PATTERNS
            .iter()
            .chain(DATA_PATTERNS)
            .chain(DATE_PATTERNS)
            .chain(PRIVACY_PATTERNS)
            .chain(PASSIVE_PATTERNS)
            .chain(CLICKBAIT_PATTERNS)
        {
            assert!(regex::Regex::new(pattern).is_ok(), "{} failed to compile", label);
        }
    }

    #[test]
    fn test_lists_are_lowercase() {
        for list in [
            LOADED_WORDS,
            OPINION_WORDS,
            WEAK_ATTRIBUTIONS,
            VAGUE_CLAIMS,
            WEASEL_WORDS,
            BALANCE_INDICATORS,
            INFLAMMATORY_WORDS,
            ABSOLUTE_WORDS,
            UNATTRIBUTED_OPINIONS,
        ] {
            for term in list {
                assert_eq!(*term, term.to_lowercase());
            }
        }
    }
}

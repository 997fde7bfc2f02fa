//! Confidence estimation
//!
//! Confidence says how far the text's length and structure support a
//! reliable score. It starts at 1.0 and is discounted multiplicatively:
//!
//! | Condition              | Factor |
//! |------------------------|-------:|
//! | words < 100            | 0.70   |
//! | 100 <= words < 200     | 0.85   |
//! | words > 2000           | 0.90   |
//! | sentences < 5          | 0.80   |
//!
//! Each applied discount adds a warning.

use crate::parsers::ParsedStructure;
use serde::{Deserialize, Serialize};

/// Confidence reported for input rejected by the garbage gate
pub const GARBAGE_CONFIDENCE: f64 = 0.1;

const VERY_SHORT_WORDS: usize = 100;
const SHORT_WORDS: usize = 200;
const VERY_LONG_WORDS: usize = 2000;
const FEW_SENTENCES: usize = 5;

const HIGH_CONFIDENCE: f64 = 0.9;
const MODERATE_CONFIDENCE: f64 = 0.75;

/// Confidence value with its explanation and warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub confidence: f64,
    pub explanation: String,
    pub warnings: Vec<String>,
}

impl ConfidenceAssessment {
    /// Assessment attached to a garbage report
    pub fn garbage(reason: &str) -> Self {
        Self {
            confidence: GARBAGE_CONFIDENCE,
            explanation: format!("Analysis not performed: {}", reason),
            warnings: vec![reason.to_string()],
        }
    }
}

/// Fixed message for a confidence value
pub fn explain(confidence: f64) -> &'static str {
    if confidence >= HIGH_CONFIDENCE {
        "Confidence is high: the article is long and structured enough for reliable scoring."
    } else if confidence >= MODERATE_CONFIDENCE {
        "Confidence is moderate: scores are indicative but may shift with more text."
    } else {
        "Confidence is low, manual review recommended."
    }
}

pub fn assess(parsed: &ParsedStructure) -> ConfidenceAssessment {
    let words = parsed.word_count;
    let mut confidence = 1.0;
    let mut warnings = Vec::new();

    if words < VERY_SHORT_WORDS {
        confidence *= 0.7;
        warnings.push(format!(
            "Article is very short ({} words); scores may not be reliable",
            words
        ));
    } else if words < SHORT_WORDS {
        confidence *= 0.85;
        warnings.push(format!(
            "Article is short ({} words); some criteria have little to work with",
            words
        ));
    } else if words > VERY_LONG_WORDS {
        confidence *= 0.9;
        warnings.push(format!(
            "Article is very long ({} words); heuristics may miss local problems",
            words
        ));
    }

    if parsed.sentence_count < FEW_SENTENCES {
        confidence *= 0.8;
        warnings.push(format!(
            "Only {} sentence(s) detected; structure metrics are approximate",
            parsed.sentence_count
        ));
    }

    ConfidenceAssessment {
        confidence,
        explanation: explain(confidence).to_string(),
        warnings,
    }
}

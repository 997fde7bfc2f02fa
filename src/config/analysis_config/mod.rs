//! Analysis configuration support
//!
//! Loads configuration from `newsgrade.toml` or `.newsgraderc.json` in the
//! working directory, falling back to the user config file.
//!
//! # Configuration Format
//!
//! ```toml
//! # newsgrade.toml
//!
//! [weights]
//! objectivity = 0.20
//! source_quality = 0.20
//!
//! [garbage]
//! min_unique_ratio = 0.30
//! max_gibberish_ratio = 0.15
//!
//! [linguistics]
//! segmenter = "abbreviation-aware"
//! pronouncing_dictionary = "/usr/share/dict/cmudict.dict"
//!
//! [defaults]
//! format = "text"
//! fail_below = 70
//! ```

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Criterion;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Annotated template written by `newsgrade init`
pub const CONFIG_TEMPLATE: &str = r#"# newsgrade configuration

[weights]
# Criterion weights for the overall score (must sum to 1.0)
objectivity = 0.20
source_quality = 0.20
factual_accuracy = 0.15
writing_clarity = 0.10
ethical_standards = 0.15
bias_control = 0.10
structure_flow = 0.05
headline_quality = 0.05

[garbage]
# Input below these limits is rejected before scoring
min_words = 10
min_unique_ratio = 0.30
max_gibberish_ratio = 0.15
min_avg_sentence_words = 4.0
max_urls = 5
min_alpha_ratio = 0.50

[feedback]
# Overall score below which the fundamentals module is recommended
low_overall_score = 60
# Number of weak criteria required for the fundamentals module
min_weak_criteria = 3
# Criterion score below which an improvement action is generated
weak_threshold = 70.0

[linguistics]
# "heuristic" or "abbreviation-aware"
segmenter = "heuristic"
# CMU-format pronouncing dictionary for syllable counts (optional)
# pronouncing_dictionary = "/usr/share/dict/cmudict.dict"

[defaults]
# Default output format (text, json, markdown)
format = "text"
# Exit with code 1 when an article scores below this value
# fail_below = 70
"#;

/// Analysis configuration loaded from newsgrade.toml or similar
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AnalysisConfig {
    /// Criterion weights for aggregation
    #[serde(default)]
    pub weights: CriterionWeights,

    /// Garbage-gate thresholds
    #[serde(default)]
    pub garbage: GarbageThresholds,

    /// Feedback generation thresholds
    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Sentence segmentation and syllable counting capabilities
    #[serde(default)]
    pub linguistics: LinguisticsConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

impl AnalysisConfig {
    /// Reject configurations that would corrupt the weighted aggregate
    pub fn validate(&self) -> AnalysisResult<()> {
        if let Some(bad) = Criterion::ALL
            .iter()
            .find(|c| self.weights.weight(**c) < 0.0 || !self.weights.weight(**c).is_finite())
        {
            return Err(AnalysisError::InvalidConfig(format!(
                "weight for {} must be a non-negative number",
                bad
            )));
        }
        if !self.weights.is_valid() {
            return Err(AnalysisError::InvalidConfig(format!(
                "criterion weights must sum to 1.0 (got {:.3})",
                self.weights.sum()
            )));
        }
        let g = &self.garbage;
        for (name, ratio) in [
            ("min_unique_ratio", g.min_unique_ratio),
            ("max_gibberish_ratio", g.max_gibberish_ratio),
            ("min_alpha_ratio", g.min_alpha_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "garbage.{} must be between 0 and 1 (got {})",
                    name, ratio
                )));
            }
        }
        Ok(())
    }
}

/// Weights for the eight criteria
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CriterionWeights {
    #[serde(default = "default_objectivity_weight")]
    pub objectivity: f64,
    #[serde(default = "default_source_quality_weight")]
    pub source_quality: f64,
    #[serde(default = "default_factual_accuracy_weight")]
    pub factual_accuracy: f64,
    #[serde(default = "default_writing_clarity_weight")]
    pub writing_clarity: f64,
    #[serde(default = "default_ethical_standards_weight")]
    pub ethical_standards: f64,
    #[serde(default = "default_bias_control_weight")]
    pub bias_control: f64,
    #[serde(default = "default_structure_flow_weight")]
    pub structure_flow: f64,
    #[serde(default = "default_headline_quality_weight")]
    pub headline_quality: f64,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            objectivity: default_objectivity_weight(),
            source_quality: default_source_quality_weight(),
            factual_accuracy: default_factual_accuracy_weight(),
            writing_clarity: default_writing_clarity_weight(),
            ethical_standards: default_ethical_standards_weight(),
            bias_control: default_bias_control_weight(),
            structure_flow: default_structure_flow_weight(),
            headline_quality: default_headline_quality_weight(),
        }
    }
}

fn default_objectivity_weight() -> f64 {
    0.20
}
fn default_source_quality_weight() -> f64 {
    0.20
}
fn default_factual_accuracy_weight() -> f64 {
    0.15
}
fn default_writing_clarity_weight() -> f64 {
    0.10
}
fn default_ethical_standards_weight() -> f64 {
    0.15
}
fn default_bias_control_weight() -> f64 {
    0.10
}
fn default_structure_flow_weight() -> f64 {
    0.05
}
fn default_headline_quality_weight() -> f64 {
    0.05
}

impl CriterionWeights {
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Objectivity => self.objectivity,
            Criterion::SourceQuality => self.source_quality,
            Criterion::FactualAccuracy => self.factual_accuracy,
            Criterion::WritingClarity => self.writing_clarity,
            Criterion::EthicalStandards => self.ethical_standards,
            Criterion::BiasControl => self.bias_control,
            Criterion::StructureFlow => self.structure_flow,
            Criterion::HeadlineQuality => self.headline_quality,
        }
    }

    fn weight_mut(&mut self, criterion: Criterion) -> &mut f64 {
        match criterion {
            Criterion::Objectivity => &mut self.objectivity,
            Criterion::SourceQuality => &mut self.source_quality,
            Criterion::FactualAccuracy => &mut self.factual_accuracy,
            Criterion::WritingClarity => &mut self.writing_clarity,
            Criterion::EthicalStandards => &mut self.ethical_standards,
            Criterion::BiasControl => &mut self.bias_control,
            Criterion::StructureFlow => &mut self.structure_flow,
            Criterion::HeadlineQuality => &mut self.headline_quality,
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.weight(*c)).sum()
    }

    /// Validate that weights sum to 1.0 (with tolerance)
    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() < 0.001
    }

    /// Normalize weights to sum to 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            for c in Criterion::ALL {
                *self.weight_mut(c) /= sum;
            }
        }
    }
}

/// Thresholds for the garbage gate.
///
/// These were chosen empirically and have no documented derivation, so they
/// stay configurable.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GarbageThresholds {
    /// Fewer words than this is "too short"
    pub min_words: usize,
    /// Unique words / total words below this is "excessive repetition"
    pub min_unique_ratio: f64,
    /// Function-word check applies above this many words
    pub function_word_gate: usize,
    /// Gibberish words / total words above this is rejected
    pub max_gibberish_ratio: f64,
    /// Average words per sentence below this is degenerate
    pub min_avg_sentence_words: f64,
    /// Sentence-structure check applies above this many words
    pub sentence_gate_words: usize,
    /// All-caps check applies above this many words
    pub all_caps_gate_words: usize,
    /// Lowercase check applies above this many words
    pub lowercase_gate_words: usize,
    /// Fewer uppercase characters than this (with the lowercase gate) is rejected
    pub min_uppercase_chars: usize,
    /// Punctuation check applies above this many words
    pub punctuation_gate_words: usize,
    /// More URL-like tokens than this is spam
    pub max_urls: usize,
    /// Alphabetic characters / all characters below this is rejected
    pub min_alpha_ratio: f64,
    /// Journalistic-indicator check applies above this many words
    pub indicator_gate_words: usize,
    /// Gibberish words tolerated when no journalistic indicator exists
    pub max_gibberish_without_indicators: usize,
}

impl Default for GarbageThresholds {
    fn default() -> Self {
        Self {
            min_words: 10,
            min_unique_ratio: 0.30,
            function_word_gate: 20,
            max_gibberish_ratio: 0.15,
            min_avg_sentence_words: 4.0,
            sentence_gate_words: 30,
            all_caps_gate_words: 15,
            lowercase_gate_words: 30,
            min_uppercase_chars: 3,
            punctuation_gate_words: 20,
            max_urls: 5,
            min_alpha_ratio: 0.50,
            indicator_gate_words: 40,
            max_gibberish_without_indicators: 2,
        }
    }
}

/// Feedback generation thresholds
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Overall score below which the fundamentals module is prepended
    pub low_overall_score: u8,
    /// Weak criteria needed (with a low overall score) for fundamentals
    pub min_weak_criteria: usize,
    /// Criterion score below which an improvement action is generated
    pub weak_threshold: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            low_overall_score: 60,
            min_weak_criteria: 3,
            weak_threshold: 70.0,
        }
    }
}

/// Which sentence segmenter to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SegmenterKind {
    /// Split on terminal punctuation followed by a capital letter
    #[default]
    Heuristic,
    /// Like `Heuristic`, but never splits after known abbreviations
    AbbreviationAware,
}

/// Linguistic capability selection
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct LinguisticsConfig {
    #[serde(default)]
    pub segmenter: SegmenterKind,

    /// CMU-format pronouncing dictionary used for syllable counts
    #[serde(default)]
    pub pronouncing_dictionary: Option<PathBuf>,
}

/// Default CLI flags that can be set in config
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Exit with code 1 when an article scores below this value
    #[serde(default)]
    pub fail_below: Option<u8>,
}

/// Load analysis configuration.
///
/// Searches in this order:
/// 1. `explicit` path (must exist and parse)
/// 2. `newsgrade.toml` in `dir`
/// 3. `.newsgraderc.json` in `dir`
/// 4. `~/.config/newsgrade/config.toml`
///
/// Returns default configuration if no config file is found. The loaded
/// configuration is always validated.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<AnalysisConfig> {
    let config = match explicit {
        Some(path) => load_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => discover(dir),
    };
    config.validate()?;
    Ok(config)
}

fn discover(dir: &Path) -> AnalysisConfig {
    let candidates = [dir.join("newsgrade.toml"), dir.join(".newsgraderc.json")];
    let user = super::user_config_path();

    for path in candidates.iter().chain(user.iter()) {
        if !path.exists() {
            continue;
        }
        match load_file(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    AnalysisConfig::default()
}

fn load_file(path: &Path) -> anyhow::Result<AnalysisConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}

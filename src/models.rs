//! Core data models for newsgrade
//!
//! These models are shared by every pipeline stage: the parsed article
//! structure, per-criterion scores with their evidence, and the final
//! `AnalysisReport` that is handed back to callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generate a deterministic issue ID based on content hash.
///
/// The ID is a 16-character hex string derived from the category and the
/// issue text, so identical findings on identical text always share an ID.
pub fn deterministic_issue_id(category: &str, issue: &str) -> String {
    let input = format!("{category}\n{issue}");
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}

/// The eight fixed scoring criteria
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Objectivity,
    SourceQuality,
    FactualAccuracy,
    WritingClarity,
    EthicalStandards,
    BiasControl,
    StructureFlow,
    HeadlineQuality,
}

impl Criterion {
    /// All criteria in report order
    pub const ALL: [Criterion; 8] = [
        Criterion::Objectivity,
        Criterion::SourceQuality,
        Criterion::FactualAccuracy,
        Criterion::WritingClarity,
        Criterion::EthicalStandards,
        Criterion::BiasControl,
        Criterion::StructureFlow,
        Criterion::HeadlineQuality,
    ];

    /// Machine name, matches the JSON field in `score_breakdown`
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Objectivity => "objectivity",
            Criterion::SourceQuality => "source_quality",
            Criterion::FactualAccuracy => "factual_accuracy",
            Criterion::WritingClarity => "writing_clarity",
            Criterion::EthicalStandards => "ethical_standards",
            Criterion::BiasControl => "bias_control",
            Criterion::StructureFlow => "structure_flow",
            Criterion::HeadlineQuality => "headline_quality",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Objectivity => "Objectivity",
            Criterion::SourceQuality => "Source Quality",
            Criterion::FactualAccuracy => "Factual Accuracy",
            Criterion::WritingClarity => "Writing Clarity",
            Criterion::EthicalStandards => "Ethical Standards",
            Criterion::BiasControl => "Bias Control",
            Criterion::StructureFlow => "Structure & Flow",
            Criterion::HeadlineQuality => "Headline Quality",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single piece of evidence backing a criterion score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evidence {
    Flag(bool),
    Count(usize),
    Metric(f64),
    Text(String),
}

impl Evidence {
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Evidence::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_metric(&self) -> Option<f64> {
        match self {
            Evidence::Metric(v) => Some(*v),
            Evidence::Count(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Evidence::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// Score for one criterion plus the evidence that produced it.
///
/// Evidence keys are either matched terms (`"shocking" -> 2`) or named
/// signals (`"named_sources" -> 3`, `"has_date" -> true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    /// Final score, clamped to 0-100
    pub score: f64,
    #[serde(default)]
    pub evidence: BTreeMap<String, Evidence>,
}

impl CriterionScore {
    /// Zero score with no evidence (used for garbage input)
    pub fn zero(criterion: Criterion) -> Self {
        Self {
            criterion,
            score: 0.0,
            evidence: BTreeMap::new(),
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.evidence.get(key).and_then(Evidence::as_count).unwrap_or(0)
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.evidence.get(key).and_then(Evidence::as_metric)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.evidence.get(key).and_then(Evidence::as_flag).unwrap_or(false)
    }

    /// Term counts recorded under `prefix`, with the prefix stripped.
    /// Items borrow only from `self`.
    pub fn terms_with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        let prefix = prefix.to_string();
        self.evidence.iter().filter_map(move |(k, v)| {
            let term = k.strip_prefix(prefix.as_str())?;
            v.as_count().map(|n| (term, n))
        })
    }
}

/// Scores for all eight criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub objectivity: CriterionScore,
    pub source_quality: CriterionScore,
    pub factual_accuracy: CriterionScore,
    pub writing_clarity: CriterionScore,
    pub ethical_standards: CriterionScore,
    pub bias_control: CriterionScore,
    pub structure_flow: CriterionScore,
    pub headline_quality: CriterionScore,
}

impl ScoreBreakdown {
    /// Breakdown with every criterion at zero
    pub fn zeroed() -> Self {
        Self {
            objectivity: CriterionScore::zero(Criterion::Objectivity),
            source_quality: CriterionScore::zero(Criterion::SourceQuality),
            factual_accuracy: CriterionScore::zero(Criterion::FactualAccuracy),
            writing_clarity: CriterionScore::zero(Criterion::WritingClarity),
            ethical_standards: CriterionScore::zero(Criterion::EthicalStandards),
            bias_control: CriterionScore::zero(Criterion::BiasControl),
            structure_flow: CriterionScore::zero(Criterion::StructureFlow),
            headline_quality: CriterionScore::zero(Criterion::HeadlineQuality),
        }
    }

    pub fn get(&self, criterion: Criterion) -> &CriterionScore {
        match criterion {
            Criterion::Objectivity => &self.objectivity,
            Criterion::SourceQuality => &self.source_quality,
            Criterion::FactualAccuracy => &self.factual_accuracy,
            Criterion::WritingClarity => &self.writing_clarity,
            Criterion::EthicalStandards => &self.ethical_standards,
            Criterion::BiasControl => &self.bias_control,
            Criterion::StructureFlow => &self.structure_flow,
            Criterion::HeadlineQuality => &self.headline_quality,
        }
    }

    pub fn score(&self, criterion: Criterion) -> f64 {
        self.get(criterion).score
    }

    /// Store a criterion score in its slot
    pub fn set(&mut self, score: CriterionScore) {
        let slot = match score.criterion {
            Criterion::Objectivity => &mut self.objectivity,
            Criterion::SourceQuality => &mut self.source_quality,
            Criterion::FactualAccuracy => &mut self.factual_accuracy,
            Criterion::WritingClarity => &mut self.writing_clarity,
            Criterion::EthicalStandards => &mut self.ethical_standards,
            Criterion::BiasControl => &mut self.bias_control,
            Criterion::StructureFlow => &mut self.structure_flow,
            Criterion::HeadlineQuality => &mut self.headline_quality,
        };
        *slot = score;
    }

    /// Iterate criteria in report order
    pub fn iter(&self) -> impl Iterator<Item = &CriterionScore> {
        Criterion::ALL.into_iter().map(move |c| self.get(c))
    }
}

/// Letter grade derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl LetterGrade {
    /// Grade ladder: (minimum score, grade), highest first
    pub const LADDER: [(u8, LetterGrade); 12] = [
        (97, LetterGrade::APlus),
        (93, LetterGrade::A),
        (90, LetterGrade::AMinus),
        (87, LetterGrade::BPlus),
        (83, LetterGrade::B),
        (80, LetterGrade::BMinus),
        (77, LetterGrade::CPlus),
        (73, LetterGrade::C),
        (70, LetterGrade::CMinus),
        (67, LetterGrade::DPlus),
        (63, LetterGrade::D),
        (60, LetterGrade::DMinus),
    ];

    pub fn from_score(score: u8) -> Self {
        Self::LADDER
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(LetterGrade::F)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }

    /// Grade letter without modifier ("B+" -> 'B')
    pub fn letter(&self) -> char {
        self.as_str().chars().next().unwrap_or('F')
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a detailed issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Priority tag of an improvement action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// An evidence-backed finding about the article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedIssue {
    pub id: String,
    pub category: Criterion,
    pub severity: Severity,
    pub issue: String,
    pub suggestion: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// A concrete rewrite the author can apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementAction {
    pub criterion: Criterion,
    pub priority: Priority,
    pub action: String,
    pub before: String,
    pub after: String,
    /// Weighted points this criterion is leaving on the table
    pub potential_gain: f64,
}

/// A curated learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub kind: String,
}

/// A learning module recommended to the author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub module: String,
    /// Criterion the module addresses (`None` for general modules)
    #[serde(default)]
    pub criterion: Option<Criterion>,
    pub description: String,
    pub resources: Vec<Resource>,
}

/// Basic counts about the analyzed article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArticleStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_sentence_length: f64,
    pub readability_score: f64,
    pub syllables_per_word: f64,
}

/// Complete analysis result for one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u8,
    pub letter_grade: LetterGrade,
    pub confidence: f64,
    pub confidence_explanation: String,
    pub warnings: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub critical_issues: Vec<String>,
    pub detailed_issues: Vec<DetailedIssue>,
    pub improvement_actions: Vec<ImprovementAction>,
    pub learning_recommendations: Vec<LearningRecommendation>,
    pub article_stats: ArticleStats,
    /// Why the garbage gate rejected the input (absent for scored articles)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garbage_reason: Option<String>,
}

impl AnalysisReport {
    /// True when the input was rejected by the garbage gate
    pub fn is_garbage(&self) -> bool {
        self.garbage_reason.is_some()
    }
}

//! Article analysis pipeline
//!
//! Orchestrates the full analysis of one article:
//! 1. Garbage gate (short-circuits to a terminal F report)
//! 2. Structural parsing
//! 3. Criterion scoring
//! 4. Weighted aggregation and grading
//! 5. Confidence estimation
//! 6. Feedback generation
//!
//! Data flows strictly forward. An `Analyzer` holds no per-article state,
//! so one instance can be shared across threads.

use crate::config::AnalysisConfig;
use crate::confidence::{self, ConfidenceAssessment};
use crate::error::AnalysisResult;
use crate::feedback::FeedbackGenerator;
use crate::models::{AnalysisReport, ArticleStats, LetterGrade, ScoreBreakdown};
use crate::parsers::{ParsedStructure, StructuralParser};
use crate::scoring::{Aggregator, ScoringEngine};
use crate::validation::{GarbageDetector, GarbageVerdict};
use tracing::{debug, info};

/// Full analysis pipeline
#[derive(Debug)]
pub struct Analyzer {
    detector: GarbageDetector,
    parser: StructuralParser,
    engine: ScoringEngine,
    aggregator: Aggregator,
    feedback: FeedbackGenerator,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with the default configuration and heuristic capabilities
    pub fn new() -> Self {
        let config = AnalysisConfig::default();
        Self {
            detector: GarbageDetector::new(config.garbage.clone()),
            parser: StructuralParser::default(),
            engine: ScoringEngine::new(),
            aggregator: Aggregator::new(config.weights.clone()),
            feedback: FeedbackGenerator::new(config.feedback.clone(), config.weights),
        }
    }

    /// Build from configuration. Validates weights and thresholds and
    /// loads the configured linguistic capabilities.
    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self {
            detector: GarbageDetector::new(config.garbage.clone()),
            parser: StructuralParser::from_config(&config.linguistics)?,
            engine: ScoringEngine::new(),
            aggregator: Aggregator::new(config.weights.clone()),
            feedback: FeedbackGenerator::new(config.feedback.clone(), config.weights.clone()),
        })
    }

    /// Replace the structural parser (custom segmenter or syllable counter)
    pub fn with_parser(mut self, parser: StructuralParser) -> Self {
        self.parser = parser;
        self
    }

    /// Replace the scoring engine
    pub fn with_engine(mut self, engine: ScoringEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Analyze one article.
    ///
    /// Fails only on empty input. Garbage input yields a terminal F report.
    pub fn analyze(&self, text: &str) -> AnalysisResult<AnalysisReport> {
        let verdict = self.detector.validate(text)?;
        if verdict.is_garbage {
            debug!("Skipping scorers: {} (score {})", verdict.reason, verdict.score);
            return Ok(garbage_report(&verdict, text));
        }

        let parsed = self.parser.parse(text);
        debug!(
            "Parsed {} words, {} sentences, {} paragraphs",
            parsed.word_count,
            parsed.sentence_count,
            parsed.paragraph_count()
        );

        let breakdown = self.engine.score(text, &parsed);
        let aggregate = self.aggregator.aggregate(&breakdown);
        let assessment = confidence::assess(&parsed);
        let feedback = self
            .feedback
            .generate(&breakdown, &parsed, aggregate.overall_score);

        info!(
            "Graded {} ({}), confidence {:.2}",
            aggregate.overall_score, aggregate.letter_grade, assessment.confidence
        );

        Ok(AnalysisReport {
            overall_score: aggregate.overall_score,
            letter_grade: aggregate.letter_grade,
            confidence: assessment.confidence,
            confidence_explanation: assessment.explanation,
            warnings: assessment.warnings,
            score_breakdown: breakdown,
            strengths: feedback.strengths,
            critical_issues: feedback.critical_issues,
            detailed_issues: feedback.detailed_issues,
            improvement_actions: feedback.improvement_actions,
            learning_recommendations: feedback.learning_recommendations,
            article_stats: article_stats(&parsed),
            garbage_reason: None,
        })
    }

    /// Markdown explanation of how a report's overall score was computed
    pub fn explain(&self, report: &AnalysisReport) -> String {
        if let Some(reason) = &report.garbage_reason {
            return format!(
                "## Score Breakdown\n\nInput was rejected before scoring: {}\n",
                reason
            );
        }
        self.aggregator.explain(&report.score_breakdown)
    }
}

fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor
}

fn article_stats(parsed: &ParsedStructure) -> ArticleStats {
    ArticleStats {
        word_count: parsed.word_count,
        sentence_count: parsed.sentence_count,
        paragraph_count: parsed.paragraph_count(),
        avg_sentence_length: round_to(parsed.avg_sentence_length(), 1),
        readability_score: round_to(parsed.flesch_reading_ease(), 1),
        syllables_per_word: round_to(parsed.syllables_per_word(), 2),
    }
}

/// Terminal report for input rejected by the garbage gate. No scorer runs.
fn garbage_report(verdict: &GarbageVerdict, text: &str) -> AnalysisReport {
    let assessment = ConfidenceAssessment::garbage(&verdict.reason);
    AnalysisReport {
        overall_score: verdict.score,
        letter_grade: LetterGrade::F,
        confidence: assessment.confidence,
        confidence_explanation: assessment.explanation,
        warnings: assessment.warnings,
        score_breakdown: ScoreBreakdown::zeroed(),
        strengths: Vec::new(),
        critical_issues: vec![verdict.reason.clone()],
        detailed_issues: Vec::new(),
        improvement_actions: Vec::new(),
        learning_recommendations: Vec::new(),
        article_stats: ArticleStats {
            word_count: text.split_whitespace().count(),
            ..Default::default()
        },
        garbage_reason: Some(verdict.reason.clone()),
    }
}

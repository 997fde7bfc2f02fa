//! newsgrade - Deterministic journalism quality scoring
//!
//! Scores article text on eight criteria (objectivity, source quality,
//! factual accuracy, writing clarity, ethical standards, bias control,
//! structure and flow, headline quality), combines them into a weighted
//! 0-100 score with a letter grade, and generates feedback.
//!
//! ```no_run
//! let report = newsgrade::analyze("City council approves budget. ...")?;
//! println!("{} ({})", report.overall_score, report.letter_grade);
//! # Ok::<(), newsgrade::AnalysisError>(())
//! ```
//!
//! Use [`Analyzer::from_config`] for custom weights, thresholds, or
//! linguistic capabilities, and [`CachedAnalyzer`] to share one analyzer
//! across threads.

pub mod cache;
pub mod confidence;
pub mod config;
pub mod error;
pub mod feedback;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
pub mod validation;

pub use cache::CachedAnalyzer;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use models::{AnalysisReport, Criterion, LetterGrade};
pub use pipeline::Analyzer;

use std::sync::OnceLock;

static DEFAULT_ANALYZER: OnceLock<Analyzer> = OnceLock::new();

/// Analyze one article with the default configuration
pub fn analyze(text: &str) -> AnalysisResult<AnalysisReport> {
    DEFAULT_ANALYZER.get_or_init(Analyzer::new).analyze(text)
}

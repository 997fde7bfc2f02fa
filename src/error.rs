//! Error types for the analysis engine
//!
//! Garbage input is not an error: it produces a terminal F-grade report.
//! Only requests the engine refuses to process end up here.

use thiserror::Error;

/// Errors that can occur while analyzing an article
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Article text is empty")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load pronouncing dictionary from {path}: {source}")]
    Dictionary {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

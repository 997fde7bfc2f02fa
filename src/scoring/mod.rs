//! Criterion scoring and aggregation
//!
//! Each of the eight criteria is scored independently from a fixed baseline
//! with data-driven adjustments, then clamped to 0-100.
//!
//! # Scoring Formula
//!
//! ```text
//! criterion = clamp(baseline + Σ adjustments, 0, 100)
//!
//! overall = round(0.20·objectivity + 0.20·source_quality
//!               + 0.15·factual_accuracy + 0.10·writing_clarity
//!               + 0.15·ethical_standards + 0.10·bias_control
//!               + 0.05·structure_flow + 0.05·headline_quality)
//! ```
//!
//! # Baselines
//!
//! | Criterion          | Baseline | Main signals                          |
//! |--------------------|---------:|---------------------------------------|
//! | Objectivity        | 100      | loaded words, opinion adverbs, `!`    |
//! | Source Quality     | 50       | named vs. anonymous attribution       |
//! | Factual Accuracy   | 75       | figures, dates, vague claims, hedges  |
//! | Writing Clarity    | derived  | Flesch Reading Ease, passive voice    |
//! | Ethical Standards  | 85       | personal data, balance, name-calling  |
//! | Bias Control       | 90       | absolutes, unattributed opinion       |
//! | Structure & Flow   | 70       | paragraph count, lead length          |
//! | Headline Quality   | 75       | length, loaded words, clickbait       |

mod aggregator;
pub mod criteria;
mod engine;
pub mod lexicon;
pub mod rules;

pub use aggregator::{Aggregate, Aggregator};
pub use criteria::{ArticleContext, CriterionScorer};
pub use engine::ScoringEngine;

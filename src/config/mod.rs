//! Configuration module for newsgrade
//!
//! This module handles:
//! - Analysis configuration (newsgrade.toml)
//! - Criterion weight overrides
//! - Garbage-gate thresholds
//! - Linguistic capability selection
//! - CLI defaults

mod analysis_config;
mod user_config;

pub use analysis_config::{
    load_config, AnalysisConfig, CliDefaults, CriterionWeights, FeedbackConfig,
    GarbageThresholds, LinguisticsConfig, SegmenterKind, CONFIG_TEMPLATE,
};
pub use user_config::user_config_path;

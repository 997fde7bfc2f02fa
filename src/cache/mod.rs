//! Report caching
//!
//! Analysis is a pure function of the text, so reports can be memoized by a
//! hash of the input. `CachedAnalyzer` is safe to share across rayon
//! workers; the map is sharded and never held across an analysis.

use crate::error::AnalysisResult;
use crate::models::AnalysisReport;
use crate::pipeline::Analyzer;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

/// Cache key for an article body
pub fn content_hash(text: &str) -> u64 {
    xxh3_64(text.as_bytes())
}

/// `Analyzer` wrapper that memoizes reports by content hash
#[derive(Debug, Clone)]
pub struct CachedAnalyzer {
    analyzer: Arc<Analyzer>,
    reports: Arc<DashMap<u64, Arc<AnalysisReport>>>,
}

impl CachedAnalyzer {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            reports: Arc::new(DashMap::new()),
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Analyze, returning the cached report for identical text.
    /// Errors are not cached.
    pub fn analyze(&self, text: &str) -> AnalysisResult<Arc<AnalysisReport>> {
        let key = content_hash(text);
        if let Some(hit) = self.reports.get(&key) {
            debug!("Report cache hit for {:016x}", key);
            return Ok(Arc::clone(hit.value()));
        }
        let report = Arc::new(self.analyzer.analyze(text)?);
        self.reports.insert(key, Arc::clone(&report));
        Ok(report)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn clear(&self) {
        self.reports.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    const TEXT: &str = "The council met on Tuesday and approved the budget. \
                        Mayor Ana Lopez said the plan adds two parks.";

    #[test]
    fn test_identical_text_hits_cache() {
        let cache = CachedAnalyzer::new(Analyzer::new());
        let a = cache.analyze(TEXT).unwrap();
        let b = cache.analyze(TEXT).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = CachedAnalyzer::new(Analyzer::new());
        assert!(cache.analyze("").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_use() {
        let cache = CachedAnalyzer::new(Analyzer::new());
        let scores: Vec<u8> = (0..16)
            .into_par_iter()
            .map(|_| cache.analyze(TEXT).unwrap().overall_score)
            .collect();
        assert!(scores.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_content_hash_distinguishes_text() {
        assert_ne!(content_hash("a"), content_hash("b"));
        assert_eq!(content_hash(TEXT), content_hash(TEXT));
    }
}

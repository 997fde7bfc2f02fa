//! Weighted aggregation of criterion scores into the overall score and
//! letter grade.

use crate::config::CriterionWeights;
use crate::models::{Criterion, Evidence, LetterGrade, ScoreBreakdown};
use std::fmt::Write;

/// Overall score and grade for one breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// Unrounded weighted sum
    pub weighted: f64,
    pub overall_score: u8,
    pub letter_grade: LetterGrade,
}

/// Combines criterion scores with fixed weights
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    weights: CriterionWeights,
}

impl Aggregator {
    /// Weights must already be validated (non-negative, summing to 1.0)
    pub fn new(weights: CriterionWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &CriterionWeights {
        &self.weights
    }

    /// Weighted contribution of each criterion, in report order
    pub fn contributions(&self, breakdown: &ScoreBreakdown) -> Vec<(Criterion, f64)> {
        Criterion::ALL
            .iter()
            .map(|c| (*c, self.weights.weight(*c) * breakdown.score(*c)))
            .collect()
    }

    pub fn aggregate(&self, breakdown: &ScoreBreakdown) -> Aggregate {
        let weighted: f64 = self.contributions(breakdown).iter().map(|(_, v)| v).sum();
        let overall_score = weighted.round().clamp(0.0, 100.0) as u8;
        Aggregate {
            weighted,
            overall_score,
            letter_grade: LetterGrade::from_score(overall_score),
        }
    }

    /// Markdown table showing how the overall score was computed, followed
    /// by the evidence behind each criterion
    pub fn explain(&self, breakdown: &ScoreBreakdown) -> String {
        let aggregate = self.aggregate(breakdown);
        let mut out = String::new();
        let _ = writeln!(out, "## Score Breakdown\n");
        let _ = writeln!(out, "| Criterion | Score | Weight | Contribution |");
        let _ = writeln!(out, "|-----------|------:|-------:|-------------:|");
        for (criterion, contribution) in self.contributions(breakdown) {
            let _ = writeln!(
                out,
                "| {} | {:.1} | {:.0}% | {:.2} |",
                criterion.label(),
                breakdown.score(criterion),
                self.weights.weight(criterion) * 100.0,
                contribution
            );
        }
        let _ = writeln!(
            out,
            "\n**Overall:** {:.2} rounds to **{}** ({})",
            aggregate.weighted, aggregate.overall_score, aggregate.letter_grade
        );

        let with_evidence: Vec<_> = breakdown.iter().filter(|c| !c.evidence.is_empty()).collect();
        if !with_evidence.is_empty() {
            let _ = writeln!(out, "\n### Evidence\n");
            for c in with_evidence {
                let items: Vec<String> = c
                    .evidence
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, format_evidence(value)))
                    .collect();
                let _ = writeln!(out, "- **{}**: {}", c.criterion.label(), items.join(", "));
            }
        }
        out
    }
}

fn format_evidence(value: &Evidence) -> String {
    match value {
        Evidence::Flag(b) => b.to_string(),
        Evidence::Count(n) => n.to_string(),
        Evidence::Metric(v) => format!("{:.2}", v),
        Evidence::Text(t) => format!("\"{}\"", t),
    }
}

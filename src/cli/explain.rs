//! Explain command - show how articles are graded

use anyhow::{Context, Result};
use console::style;
use newsgrade::config::{load_config, CriterionWeights};
use newsgrade::models::{Criterion, LetterGrade};
use newsgrade::scoring::ScoringEngine;
use std::fmt::Write;
use std::path::Path;

pub(super) fn run(config: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(config, &cwd)?;
    print!("{}", render(&config.weights, &ScoringEngine::new())?);
    Ok(())
}

fn render(weights: &CriterionWeights, engine: &ScoringEngine) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "\n{}", style("Criteria").bold())?;
    let descriptions = engine.descriptions();
    for c in Criterion::ALL {
        let description = descriptions
            .iter()
            .find(|(criterion, _)| *criterion == c)
            .map(|(_, d)| *d)
            .unwrap_or("");
        writeln!(
            out,
            "  {:<18} {:>4.0}%  {}",
            c.label(),
            weights.weight(c) * 100.0,
            style(description).dim()
        )?;
    }

    writeln!(out, "\n{}", style("Overall").bold())?;
    writeln!(
        out,
        "  Sum of score x weight, rounded to the nearest integer and clamped to 0-100"
    )?;

    writeln!(out, "\n{}", style("Grades").bold())?;
    for (min, grade) in LetterGrade::LADDER {
        writeln!(out, "  {:<3} {:>3}+", grade.as_str(), min)?;
    }
    writeln!(out, "  {:<3} below {}", LetterGrade::F.as_str(), lowest_passing())?;
    Ok(out)
}

fn lowest_passing() -> u8 {
    LetterGrade::LADDER
        .iter()
        .map(|(min, _)| *min)
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_weights_and_ladder() {
        let out = render(&CriterionWeights::default(), &ScoringEngine::new()).unwrap();
        assert!(out.contains("Objectivity"));
        assert!(out.contains("Headline Quality"));
        assert!(out.contains("20%"));
        assert!(out.contains("A+"));
        assert!(out.contains("below 60"));
    }
}

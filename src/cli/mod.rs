//! CLI command definitions and handlers

mod analyze;
mod explain;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a score threshold (0-100)
fn parse_score(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid score", s))?;
    if n > 100 {
        Err("score cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// newsgrade - Deterministic journalism quality scoring
///
/// Runs entirely offline. Article text never leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "newsgrade")]
#[command(
    version,
    about = "Score news articles on eight journalism criteria and get actionable feedback",
    long_about = "newsgrade scores article text on objectivity, source quality, factual \
accuracy, writing clarity, ethical standards, bias control, structure and headline \
quality, then combines them into a weighted 0-100 score and letter grade.\n\n\
Scoring is rule-based and deterministic: the same text always gets the same report.",
    after_help = "\
Examples:
  newsgrade analyze story.txt                  Analyze one article
  newsgrade analyze drafts/*.txt -f json       JSON output for scripting
  cat story.txt | newsgrade analyze -          Read from stdin
  newsgrade analyze story.txt --fail-below 70  Exit code 1 below 70 (CI mode)
  newsgrade explain                            Show weights and grade ladder"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Config file (default: newsgrade.toml or .newsgraderc.json in the
    /// current directory, then the user config)
    #[arg(long, global = true, env = "NEWSGRADE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an annotated newsgrade.toml to the given directory
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing newsgrade.toml
        #[arg(long)]
        force: bool,
    },

    /// Analyze one or more articles
    #[command(after_help = "\
Examples:
  newsgrade analyze story.txt                        Terminal report
  newsgrade analyze a.txt b.txt --format markdown    One section per article
  newsgrade analyze story.txt -f json -o report.json Write JSON to a file
  newsgrade analyze story.txt --explain-score        Show the weighted formula")]
    Analyze {
        /// Article files to analyze (`-` reads stdin)
        #[arg(required = true, value_name = "FILES")]
        files: Vec<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any article scores below this value
        #[arg(long, value_parser = parse_score)]
        fail_below: Option<u8>,

        /// Explain the scoring formula with full breakdown
        #[arg(long)]
        explain_score: bool,
    },

    /// Show criterion weights and the grade ladder
    Explain,
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, force } => init::run(&path, force),

        Commands::Analyze {
            files,
            format,
            output,
            fail_below,
            explain_score,
        } => analyze::run(analyze::AnalyzeOptions {
            files,
            format,
            output,
            fail_below,
            explain_score,
            config: cli.config,
        }),

        Commands::Explain => explain::run(cli.config.as_deref()),
    }
}

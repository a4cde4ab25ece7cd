//! Command-line interface definitions for dupebench.
//!
//! All arguments are defined with the clap derive API. The tool has a single
//! operation — run the benchmark — so the surface is flat options plus the
//! usual verbosity and color controls.
//!
//! # Example
//!
//! ```bash
//! # Benchmark all four strategies with the reference settings
//! dupebench
//!
//! # 50 trials over 20000-element inputs, JSON report
//! dupebench -n 50 --length 20000 --output json
//!
//! # Only the parallel strategy, reproducible inputs
//! dupebench -s parallel --seed 42
//!
//! # Time the exhaustive miss path (inputs without a duplicate)
//! dupebench --clean
//! ```

use clap::{Parser, ValueEnum};

use crate::search::Strategy;

/// Benchmark harness for single-duplicate-pair search strategies.
///
/// Times each selected strategy over repeated trials on freshly generated
/// inputs (shuffled unique integers with one injected duplicate pair) and
/// reports the average wall-clock latency per strategy.
#[derive(Debug, Parser)]
#[command(name = "dupebench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Emit errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Number of timed trials per strategy
    #[arg(short = 'n', long, value_name = "N", default_value_t = 10)]
    pub iterations: usize,

    /// Length of each generated input
    #[arg(short, long, value_name = "LEN", default_value_t = 10_000)]
    pub length: usize,

    /// Starting fan-out for the parallel strategy
    ///
    /// Must be a power of two that divides LEN evenly.
    #[arg(short, long, value_name = "F", default_value_t = 4)]
    pub fanout: usize,

    /// Strategy to benchmark (repeatable; default: all four)
    #[arg(short, long = "strategy", value_enum, value_name = "STRATEGY")]
    pub strategies: Vec<Strategy>,

    /// Seed for the input generator, for reproducible runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Generate inputs without a duplicate (times the exhaustive miss path)
    #[arg(long)]
    pub clean: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One console line per strategy
    Text,
    /// Machine-readable run report
    Json,
}

impl Cli {
    /// Selected strategies in run order, defaulting to all four.
    #[must_use]
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dupebench"]).unwrap();
        assert_eq!(cli.iterations, 10);
        assert_eq!(cli.length, 10_000);
        assert_eq!(cli.fanout, 4);
        assert!(cli.strategies.is_empty());
        assert_eq!(cli.selected_strategies(), Strategy::ALL.to_vec());
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.clean);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_strategy_selection() {
        let cli = Cli::try_parse_from(["dupebench", "-s", "parallel", "-s", "full"]).unwrap();
        assert_eq!(
            cli.selected_strategies(),
            vec![Strategy::Parallel, Strategy::Full]
        );
    }

    #[test]
    fn test_value_enum_names() {
        let cli = Cli::try_parse_from(["dupebench", "-s", "triangular-rev"]).unwrap();
        assert_eq!(cli.selected_strategies(), vec![Strategy::TriangularRev]);
    }

    #[test]
    fn test_numeric_options() {
        let cli = Cli::try_parse_from([
            "dupebench", "-n", "50", "--length", "4096", "--fanout", "8", "--seed", "42",
        ])
        .unwrap();
        assert_eq!(cli.iterations, 50);
        assert_eq!(cli.length, 4096);
        assert_eq!(cli.fanout, 8);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["dupebench", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_json_output() {
        let cli = Cli::try_parse_from(["dupebench", "--output", "json", "--clean"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.clean);
    }
}

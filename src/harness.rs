//! Benchmark harness: timed trials, averaging, report assembly.
//!
//! Each selected strategy runs for a configured number of trials. Every
//! trial generates a fresh input and times only the search call itself;
//! generation and bookkeeping stay outside the measured window. The shutdown
//! flag is checked between trials so Ctrl+C interrupts a long run cleanly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::generate::{Generator, MIN_INJECTION_LENGTH};
use crate::search::{ParallelSearch, PartitionError, Strategy};

/// Errors from a benchmark run.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// The run was stopped by a shutdown request between trials.
    #[error("benchmark interrupted")]
    Interrupted,

    /// The iteration count was zero.
    #[error("iteration count must be at least 1")]
    NoIterations,

    /// The input length is too small for duplicate injection.
    #[error("input length {len} is too small for duplicate injection (minimum {MIN_INJECTION_LENGTH})")]
    LengthTooSmall {
        /// The rejected length
        len: usize,
    },

    /// The fan-out is invalid for the configured input length.
    #[error(transparent)]
    Partition(#[from] PartitionError),
}

/// Configuration for a benchmark run.
///
/// Built with chained `with_*` methods from [`BenchConfig::default`], which
/// carries the reference settings: 10 trials over 10,000-element inputs with
/// a starting fan-out of 4.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of timed trials per strategy.
    pub iterations: usize,
    /// Length of each generated input.
    pub length: usize,
    /// Starting fan-out for the parallel strategy.
    pub fanout: usize,
    /// RNG seed for reproducible inputs.
    pub seed: Option<u64>,
    /// Generate inputs without a duplicate (times the exhaustive miss path).
    pub clean: bool,
    /// Optional shutdown flag checked between trials.
    pub shutdown_flag: Option<Arc<AtomicBool>>,
    /// Show a per-trial progress bar.
    pub progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            length: 10_000,
            fanout: 4,
            seed: None,
            clean: false,
            shutdown_flag: None,
            progress: false,
        }
    }
}

impl BenchConfig {
    /// Set the number of timed trials per strategy.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the length of each generated input.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the starting fan-out for the parallel strategy.
    #[must_use]
    pub fn with_fanout(mut self, fanout: usize) -> Self {
        self.fanout = fanout;
        self
    }

    /// Set the RNG seed for reproducible inputs.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Generate duplicate-free inputs instead of injecting a pair.
    #[must_use]
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Set the shutdown flag for graceful interruption.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Enable the per-trial progress bar.
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }
}

/// Outcome of benchmarking one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    /// The strategy that was timed.
    pub strategy: Strategy,
    /// Duplicate value reported by the final trial, if one was found.
    pub duplicate: Option<i64>,
    /// Average wall-clock time per trial, in milliseconds.
    pub avg_ms: f64,
    /// Number of completed trials.
    pub iterations: usize,
}

/// Run `strategy` for the configured number of trials and average the
/// elapsed wall-clock time.
///
/// # Errors
///
/// Returns [`BenchError::Interrupted`] when the shutdown flag is raised
/// between trials, [`BenchError::NoIterations`] / [`BenchError::LengthTooSmall`]
/// for invalid settings, and [`BenchError::Partition`] when the parallel
/// strategy's fan-out does not fit the configured length.
pub fn run_strategy(
    strategy: Strategy,
    config: &BenchConfig,
) -> Result<StrategyReport, BenchError> {
    if config.iterations == 0 {
        return Err(BenchError::NoIterations);
    }
    if !config.clean && config.length < MIN_INJECTION_LENGTH {
        return Err(BenchError::LengthTooSmall { len: config.length });
    }
    if strategy == Strategy::Parallel {
        // Surface fan-out problems before any trial is timed.
        let search = ParallelSearch::new(config.fanout)?;
        if config.length >= 2 {
            search.validate_len(config.length)?;
        }
    }

    let mut generator = Generator::new(config.seed);
    let bar = trial_bar(strategy, config);

    let mut total = Duration::ZERO;
    let mut duplicate = None;

    for trial in 0..config.iterations {
        if config.is_shutdown_requested() {
            bar.abandon();
            return Err(BenchError::Interrupted);
        }

        let values = if config.clean {
            generator.without_duplicate(config.length)
        } else {
            generator.with_duplicate(config.length)
        };

        let start = Instant::now();
        let found = strategy.run(&values, config.fanout)?;
        total += start.elapsed();

        log::trace!("{}: trial {trial} -> {found:?}", strategy.label());
        duplicate = found;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let avg_ms = total.as_secs_f64() * 1000.0 / config.iterations as f64;
    log::debug!(
        "{}: avg {avg_ms:.3} ms over {} trials",
        strategy.label(),
        config.iterations
    );

    Ok(StrategyReport {
        strategy,
        duplicate,
        avg_ms,
        iterations: config.iterations,
    })
}

fn trial_bar(strategy: Strategy, config: &BenchConfig) -> ProgressBar {
    if !config.progress {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("{prefix:>28} [{bar:30}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    let bar = ProgressBar::new(config.iterations as u64).with_style(style);
    bar.set_prefix(strategy.label());
    bar
}

//! JSON run report for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "config": {
//!     "iterations": 10,
//!     "length": 10000,
//!     "fanout": 4,
//!     "seed": null,
//!     "clean": false
//!   },
//!   "reports": [
//!     {
//!       "strategy": "triangular-rev",
//!       "duplicate": 6,
//!       "avg_ms": 12.34,
//!       "iterations": 10
//!     }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::harness::{BenchConfig, StrategyReport};

/// Machine-readable report for a whole benchmark run.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Echo of the run configuration.
    pub config: JsonConfig,
    /// One entry per benchmarked strategy, in run order.
    pub reports: Vec<StrategyReport>,
}

/// The run configuration fields echoed into the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonConfig {
    /// Timed trials per strategy
    pub iterations: usize,
    /// Generated input length
    pub length: usize,
    /// Starting fan-out for the parallel strategy
    pub fanout: usize,
    /// RNG seed, when the run was reproducible
    pub seed: Option<u64>,
    /// Whether inputs were generated without a duplicate
    pub clean: bool,
}

impl JsonReport {
    /// Build the report from the run configuration and per-strategy results.
    #[must_use]
    pub fn new(config: &BenchConfig, reports: Vec<StrategyReport>) -> Self {
        Self {
            config: JsonConfig {
                iterations: config.iterations,
                length: config.length,
                fanout: config.fanout,
                seed: config.seed,
                clean: config.clean,
            },
            reports,
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Duplicate-pair search strategies.
//!
//! Four interchangeable strategies over the capability "sequence → optional
//! integer": three sequential nested-loop scanners differing only in scan
//! order (see [`scan`]), and a parallel coordinator that partitions the input
//! and searches the partitions concurrently with fan-out fallback (see
//! [`parallel`]). The harness is agnostic to which one it times; every
//! strategy goes through [`Strategy::run`].
//!
//! All strategies assume the benchmark's input contract: an unsorted sequence
//! containing zero or exactly one duplicated value, appearing exactly twice.

pub mod parallel;
pub mod scan;

// Re-export main types
pub use parallel::{ParallelSearch, PartitionError};
pub use scan::{scan_full, scan_triangular, scan_triangular_rev};

use clap::ValueEnum;
use serde::Serialize;

/// A selectable duplicate-search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Forward full-comparison scan (the naive baseline)
    Full,
    /// Forward triangular scan (compare only against later positions)
    Triangular,
    /// Backward triangular scan (same bounds, driven from the far end)
    TriangularRev,
    /// Partitioned concurrent search with fan-out fallback
    Parallel,
}

impl Strategy {
    /// All strategies, in report order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Full,
        Strategy::Triangular,
        Strategy::TriangularRev,
        Strategy::Parallel,
    ];

    /// Human-readable name used in the report line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Full => "brute force",
            Strategy::Triangular => "forward triangular",
            Strategy::TriangularRev => "backward triangular",
            Strategy::Parallel => "parallel backward triangular",
        }
    }

    /// Run this strategy against `values`.
    ///
    /// `fanout` is consulted only by [`Strategy::Parallel`]; the sequential
    /// scanners ignore it.
    ///
    /// # Errors
    ///
    /// Returns a [`PartitionError`] when the parallel strategy is given a
    /// fan-out that is invalid for `values`.
    pub fn run(self, values: &[i64], fanout: usize) -> Result<Option<i64>, PartitionError> {
        match self {
            Strategy::Full => Ok(scan_full(values)),
            Strategy::Triangular => Ok(scan_triangular(values)),
            Strategy::TriangularRev => Ok(scan_triangular_rev(values)),
            Strategy::Parallel => ParallelSearch::new(fanout)?.find(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_distinct() {
        for a in Strategy::ALL {
            for b in Strategy::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }

    #[test]
    fn test_all_strategies_agree_on_hit() {
        let values = [9, 1, 4, 7, 2, 4, 0, 3];
        for strategy in Strategy::ALL {
            assert_eq!(strategy.run(&values, 4), Ok(Some(4)), "{:?}", strategy);
        }
    }

    #[test]
    fn test_all_strategies_agree_on_miss() {
        let values = [9, 1, 4, 7, 2, 5, 0, 3];
        for strategy in Strategy::ALL {
            assert_eq!(strategy.run(&values, 4), Ok(None), "{:?}", strategy);
        }
    }

    #[test]
    fn test_sequential_strategies_ignore_fanout() {
        // A fan-out that would be invalid for the parallel strategy.
        assert_eq!(Strategy::Triangular.run(&[5, 5, 1], 3), Ok(Some(5)));
        assert_eq!(
            Strategy::Parallel.run(&[5, 5, 1], 3),
            Err(PartitionError::NotPowerOfTwo { fanout: 3 })
        );
    }

    #[test]
    fn test_serialized_names_are_kebab_case() {
        let json = serde_json::to_string(&Strategy::TriangularRev).unwrap();
        assert_eq!(json, "\"triangular-rev\"");
    }
}

//! Partitioned concurrent search with fan-out fallback.
//!
//! The input is split into `fanout` contiguous, non-overlapping, equal-length
//! partitions that are scanned concurrently with the backward-triangular
//! scanner. A duplicate found inside a single partition is the answer:
//! partitions are contiguous slices of an input with at most one duplicate
//! pair, so both occurrences lie in that partition. When a round misses (the
//! pair straddles a partition boundary), the fan-out is halved and the
//! original input is re-partitioned; the final round at fan-out 1 scans the
//! whole input in one piece and is authoritative.
//!
//! Within a round there is no shared mutable result slot: each partition task
//! returns its own `Option`, and rayon's `find_map_any` picks the first
//! non-`None` value with cooperative early exit for the losing tasks. Rounds
//! themselves run strictly sequentially.

use rayon::prelude::*;

use super::scan::scan_triangular_rev;

/// Errors from fan-out validation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// The fan-out was zero.
    #[error("fan-out must be at least 1")]
    ZeroFanout,

    /// The fan-out cannot be halved down to 1 through even splits.
    #[error("fan-out {fanout} is not a power of two")]
    NotPowerOfTwo {
        /// The rejected fan-out
        fanout: usize,
    },

    /// The input cannot be split into equal-length partitions.
    #[error("input length {len} is not divisible by fan-out {fanout}")]
    UnevenSplit {
        /// Length of the input
        len: usize,
        /// The starting fan-out
        fanout: usize,
    },
}

/// Parallel duplicate search over equal-length partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelSearch {
    fanout: usize,
}

impl ParallelSearch {
    /// Create a search with the given starting fan-out.
    ///
    /// The fan-out must be a non-zero power of two: if it divides the input
    /// length evenly, so does every halved fan-out on the fallback path.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ZeroFanout`] or
    /// [`PartitionError::NotPowerOfTwo`] for invalid fan-outs.
    pub fn new(fanout: usize) -> Result<Self, PartitionError> {
        if fanout == 0 {
            return Err(PartitionError::ZeroFanout);
        }
        if !fanout.is_power_of_two() {
            return Err(PartitionError::NotPowerOfTwo { fanout });
        }
        Ok(Self { fanout })
    }

    /// The starting fan-out for the first round.
    #[must_use]
    pub fn fanout(&self) -> usize {
        self.fanout
    }

    /// Check that an input of `len` elements splits evenly at this fan-out.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::UnevenSplit`] when it does not.
    pub fn validate_len(&self, len: usize) -> Result<(), PartitionError> {
        if len % self.fanout != 0 {
            return Err(PartitionError::UnevenSplit {
                len,
                fanout: self.fanout,
            });
        }
        Ok(())
    }

    /// Find the duplicated value, falling back through halved fan-outs.
    ///
    /// Returns `Ok(None)` only after the exhaustive fan-out 1 round misses,
    /// which for a valid input means no duplicate exists. Inputs shorter
    /// than two elements cannot contain a pair and return `Ok(None)` without
    /// scanning.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::UnevenSplit`] when the input length is not
    /// divisible by the starting fan-out.
    pub fn find(&self, values: &[i64]) -> Result<Option<i64>, PartitionError> {
        if values.len() < 2 {
            return Ok(None);
        }
        self.validate_len(values.len())?;

        let mut fanout = self.fanout;
        loop {
            let hit = values
                .par_chunks(values.len() / fanout)
                .find_map_any(scan_triangular_rev);

            if let Some(value) = hit {
                log::debug!("duplicate {value} found at fan-out {fanout}");
                return Ok(Some(value));
            }
            if fanout == 1 {
                // The whole-input round is exhaustive; nothing to fall back to.
                return Ok(None);
            }
            log::debug!("no duplicate at fan-out {fanout}, retrying at {}", fanout / 2);
            fanout /= 2;
        }
    }
}

//! Random test-data generation.
//!
//! Produces the benchmark's input contract: a fixed-length shuffled sequence
//! of unique integers with at most one duplicate pair. The pair is injected
//! by overwriting one random slot with [`DUPLICATE_VALUE`] — or with
//! [`FALLBACK_DUPLICATE_VALUE`] when the slot already holds it, so exactly
//! one value ends up appearing exactly twice either way.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Value injected as the duplicate pair.
pub const DUPLICATE_VALUE: i64 = 6;

/// Injected instead when the chosen slot already holds [`DUPLICATE_VALUE`].
pub const FALLBACK_DUPLICATE_VALUE: i64 = 7;

/// Minimum input length for duplicate injection: both injectable values must
/// already exist in the unique `0..length` value range.
pub const MIN_INJECTION_LENGTH: usize = 8;

/// Seedable input generator.
///
/// Seeded generators produce identical input sequences across runs, which
/// makes benchmark timings comparable between invocations.
#[derive(Debug)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Create a generator, seeded for reproducibility when `seed` is given.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Shuffled unique integers `0..length` with exactly one duplicate pair.
    ///
    /// # Panics
    ///
    /// Panics when `length` is below [`MIN_INJECTION_LENGTH`]; callers
    /// validate the configured length before generating.
    pub fn with_duplicate(&mut self, length: usize) -> Vec<i64> {
        assert!(
            length >= MIN_INJECTION_LENGTH,
            "duplicate injection needs length >= {MIN_INJECTION_LENGTH}, got {length}"
        );

        let mut values = self.without_duplicate(length);
        let slot = self.rng.gen_range(0..length);
        values[slot] = if values[slot] == DUPLICATE_VALUE {
            FALLBACK_DUPLICATE_VALUE
        } else {
            DUPLICATE_VALUE
        };
        values
    }

    /// Shuffled unique integers `0..length`, no duplicate.
    pub fn without_duplicate(&mut self, length: usize) -> Vec<i64> {
        let mut values: Vec<i64> = (0..length as i64).collect();
        values.shuffle(&mut self.rng);
        values
    }
}

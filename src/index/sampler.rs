//! Uniform random selection, injectable for deterministic tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

/// Uniform integer source used to pick indices into a file list.
///
/// `pick(n)` returns a value in `[0, n)`. Callers guarantee `n >= 1`;
/// the index never selects from an empty list.
pub trait Sampler: std::fmt::Debug + Send + Sync {
    /// Pick a uniformly distributed index in `[0, n)`.
    fn pick(&self, n: usize) -> usize;
}

/// Production sampler backed by the thread-local RNG.
///
/// Non-cryptographic and not seeded for reproducibility.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn pick(&self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Deterministic sampler that replays a fixed sequence, wrapping around.
///
/// Each replayed value is reduced modulo `n` so it always lands in range.
/// Intended for tests that need reproducible selection.
#[derive(Debug)]
pub struct SequenceSampler {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceSampler {
    /// Create a sampler that replays `values` in order, cycling.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        assert!(!values.is_empty(), "SequenceSampler needs at least one value");
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Sampler for SequenceSampler {
    fn pick(&self, n: usize) -> usize {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()] % n
    }
}

//! Test RNG: deterministic `DeterministicRng` implementations for tests.

use std::collections::VecDeque;

use glitchcity_core::rng::DeterministicRng;

/// Draw returned by `SequenceRng::next_f64` once its float script runs out.
/// High enough that no probability check below 99% succeeds.
const EXHAUSTED_FLOAT: f64 = 0.99;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Every non-zero probability check succeeds against it.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from predetermined sequences. Panics if the
/// integer sequence is exhausted; once the float sequence is exhausted every
/// draw is `0.99`. Used in tests that need specific, repeatable random
/// outcomes (e.g., which enemy spawns or whether a directive rotates).
#[derive(Debug)]
pub struct SequenceRng {
    values: VecDeque<u32>,
    floats: VecDeque<f64>,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given integer values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: values.into(),
            floats: VecDeque::new(),
        }
    }

    /// Sets the float draws returned by `next_f64`, in order.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats.into();
        self
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.values
            .pop_front()
            .expect("SequenceRng integer sequence exhausted")
    }

    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(EXHAUSTED_FLOAT)
    }
}

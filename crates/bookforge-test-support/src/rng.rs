//! Test RNG — scripted `DeterministicRng` implementations.

use bookforge_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific draws.
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

/// An RNG that replays predetermined draw sequences, ignoring requested
/// ranges. Panics when a scripted sequence is exhausted, so a test fails
/// loudly if the code under test draws more than the script anticipates.
///
/// `f64` draws return `0.0` when no `f64` script was provided, matching
/// the common case of tests that only care about index picks.
#[derive(Debug)]
pub struct SequenceRng {
    u32_values: Vec<u32>,
    f64_values: Vec<f64>,
    u32_index: usize,
    f64_index: usize,
}

impl SequenceRng {
    /// Create a `SequenceRng` scripting only the `u32` draws.
    #[must_use]
    pub fn new(u32_values: Vec<u32>) -> Self {
        Self {
            u32_values,
            f64_values: Vec::new(),
            u32_index: 0,
            f64_index: 0,
        }
    }

    /// Script the `f64` draws as well.
    #[must_use]
    pub fn with_f64s(mut self, f64_values: Vec<f64>) -> Self {
        self.f64_values = f64_values;
        self
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let value = self.u32_values[self.u32_index];
        self.u32_index += 1;
        value
    }

    fn next_f64(&mut self) -> f64 {
        if self.f64_values.is_empty() {
            return 0.0;
        }
        let value = self.f64_values[self.f64_index];
        self.f64_index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_rng_replays_u32_script() {
        let mut rng = SequenceRng::new(vec![3, 1, 4]);
        assert_eq!(rng.next_u32_range(0, 100), 3);
        assert_eq!(rng.next_u32_range(0, 100), 1);
        assert_eq!(rng.next_u32_range(0, 100), 4);
    }

    #[test]
    fn test_sequence_rng_replays_f64_script() {
        let mut rng = SequenceRng::new(vec![]).with_f64s(vec![0.25, 0.75]);
        assert!((rng.next_f64() - 0.25).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sequence_rng_defaults_f64_to_zero() {
        let mut rng = SequenceRng::new(vec![]);
        assert!((rng.next_f64() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_sequence_rng_panics_when_u32_script_is_exhausted() {
        let mut rng = SequenceRng::new(vec![1]);
        rng.next_u32_range(0, 10);
        rng.next_u32_range(0, 10);
    }

    #[test]
    fn test_mock_rng_returns_min_and_zero() {
        let mut rng = MockRng;
        assert_eq!(rng.next_u32_range(7, 20), 7);
        assert!((rng.next_f64() - 0.0).abs() < f64::EPSILON);
    }
}

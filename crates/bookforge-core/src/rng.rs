//! Random number generator abstraction for determinism.
//!
//! Every draw for one catalog page flows through a single
//! [`DeterministicRng`] instance, so identical `(seed, page)` inputs replay
//! identical draw sequences. Tests inject scripted implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
///
/// The two required draws are the primitives; the provided methods are the
/// fixed derived draws the generator uses, defined here so every
/// implementation agrees on how many primitive draws each one consumes
/// (one each).
pub trait DeterministicRng: Send {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Draw a single decimal digit in `[0, 9]`.
    fn next_digit(&mut self) -> u8 {
        // Always one u32 draw.
        #[allow(clippy::cast_possible_truncation)]
        {
            self.next_u32_range(0, 9) as u8
        }
    }

    /// Return `true` with the given probability. Always one f64 draw.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Draw a uniform index into a non-empty collection of length `len`.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index requires a non-empty collection");
        let max = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.next_u32_range(0, max) as usize
    }
}

/// Pick a uniform element from a non-empty slice.
pub fn pick<'a, T: ?Sized>(rng: &mut dyn DeterministicRng, items: &'a [&'a T]) -> &'a T {
    items[rng.pick_index(items.len())]
}

/// The production random source: one instance per generation request,
/// seeded from `seed + page` so each page owns an independent,
/// reproducible draw stream.
pub struct PageRng {
    inner: StdRng,
}

impl PageRng {
    /// Combine `seed` and `page` into one effective seed and construct
    /// the generator from it.
    #[must_use]
    pub fn new(seed: u64, page: u32) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed.wrapping_add(u64::from(page))),
        }
    }
}

impl DeterministicRng for PageRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.inner.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random()
    }
}

//! Fractional-average-to-count derivation.

use bookforge_core::rng::DeterministicRng;

/// Turn a non-negative fractional average into an integer count:
/// `floor(avg)`, plus one with probability equal to the fractional part.
///
/// Always consumes exactly one `f64` draw, so callers deriving several
/// counts stay aligned on the shared draw stream. Over many records the
/// mean of the returned counts converges to `avg`.
pub fn probabilistic_count(avg: f64, rng: &mut dyn DeterministicRng) -> u32 {
    debug_assert!(avg >= 0.0, "averages are validated non-negative");
    let base = avg.floor();
    let fraction = avg - base;
    let bump = u32::from(rng.next_f64() < fraction);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        base as u32 + bump
    }
}

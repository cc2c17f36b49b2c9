//! Shared test doubles for the bookforge workspace.

mod rng;

pub use rng::{MockRng, SequenceRng};

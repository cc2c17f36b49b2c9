//! Bookforge Core — shared abstractions.
//!
//! This crate defines the seeded random source, the locale tag, and the
//! domain error type that every other crate depends on. It contains no
//! generation logic of its own.

pub mod error;
pub mod locale;
pub mod rng;

//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A request parameter is outside its allowed bounds.
    #[error("validation error: {0}")]
    Validation(String),

    /// An internal invariant was violated during generation.
    ///
    /// This is a programming error: generation is pure, so any failure
    /// reproduces exactly from the same `(seed, page)` pair.
    #[error("generation failure: {0}")]
    Generation(String),
}

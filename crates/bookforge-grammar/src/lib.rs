//! Bookforge Grammar — locale-specific text generation.
//!
//! Holds the pattern tables and word lists for the supported locales and
//! renders titles, publishers, names, and reviews from a caller-supplied
//! deterministic random source.

mod grammar;
mod locales;
pub mod template;

pub use grammar::{Grammar, LocaleGrammar, grammar_for};
pub use template::{Template, TemplateError};

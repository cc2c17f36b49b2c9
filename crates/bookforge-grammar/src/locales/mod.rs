//! Raw pattern and word tables per locale.
//!
//! Each locale module exports one [`LocaleData`] constant. The tables are
//! plain `&'static str` data; pattern strings are parsed into token
//! templates when the owning [`crate::Grammar`] is constructed.

mod de;
mod en;
mod fr;

pub(crate) use de::GERMAN;
pub(crate) use en::ENGLISH;
pub(crate) use fr::FRENCH;

/// The static tables backing one locale's grammar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocaleData {
    pub title_patterns: &'static [&'static str],
    pub subtitle_patterns: &'static [&'static str],
    pub taglines: &'static [&'static str],
    pub review_patterns: &'static [&'static str],
    pub imprint_pattern: &'static str,
    pub publisher_houses: &'static [&'static str],
    pub adjectives: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub places: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub sentiments: &'static [&'static str],
    pub reactions: &'static [&'static str],
    pub ratings: &'static [&'static str],
    pub aspects: &'static [&'static str],
    pub openings: &'static [&'static str],
    pub book_kinds: &'static [&'static str],
    pub reader_kinds: &'static [&'static str],
    pub superlatives: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub family_names: &'static [&'static str],
    /// Author names render family-name-first ("Schneider, Greta").
    pub family_name_first: bool,
}

/// Roman volume numerals, shared by every locale's subtitle patterns.
pub(crate) const NUMERALS: &[&str] = &["I", "II", "III", "IV", "V"];

/// Filler-sentence vocabulary, shared by every locale (reviews embed
/// lorem-style sentences regardless of language).
pub(crate) const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "diam",
    "nonummy", "nibh", "euismod", "tincidunt", "laoreet", "magna", "aliquam", "erat", "volutpat",
    "veniam", "quis", "nostrud", "exerci", "tation", "ullamcorper", "suscipit", "lobortis", "nisl",
    "aliquip", "commodo",
];

//! Locale tags for the supported grammars.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported catalog locale.
///
/// Parsing is total: any tag outside the supported set resolves to
/// [`Locale::En`], so an unknown locale can never fail a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (the fallback).
    En,
    /// German.
    De,
    /// French.
    Fr,
}

impl Locale {
    /// Normalize a raw locale tag, falling back to English.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "de" => Self::De,
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }

    /// The canonical lowercase tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_tags() {
        assert_eq!(Locale::parse("en"), Locale::En);
        assert_eq!(Locale::parse("de"), Locale::De);
        assert_eq!(Locale::parse("fr"), Locale::Fr);
    }

    #[test]
    fn test_parse_unknown_tag_falls_back_to_english() {
        assert_eq!(Locale::parse("xx"), Locale::En);
        assert_eq!(Locale::parse(""), Locale::En);
        assert_eq!(Locale::parse("EN"), Locale::En);
        assert_eq!(Locale::parse("de-AT"), Locale::En);
    }

    #[test]
    fn test_tag_round_trip() {
        for locale in [Locale::En, Locale::De, Locale::Fr] {
            assert_eq!(Locale::parse(locale.tag()), locale);
        }
    }
}

//! Tagged-token pattern templates.
//!
//! Patterns are written as literal strings with named placeholders
//! (`"The {noun} of {place}"`) and parsed exactly once, when a locale's
//! tables are constructed. Rendering then walks the token sequence and
//! resolves each placeholder against its word list, so no substitution pass
//! ever re-scans text that earlier substitutions produced.

use thiserror::Error;

/// A named placeholder inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Evocative title adjective ("Forgotten", "Vergessen", "Oublié").
    Adjective,
    /// Title noun ("Dragon", "Schwert", "Couronne").
    Noun,
    /// Place or realm ("the Mountains", "der Wüste").
    Place,
    /// Title verb ("Falls", "Erwacht", "Disparaît").
    Verb,
    /// A given name from the locale's name list.
    GivenName,
    /// A family name from the locale's name list.
    Surname,
    /// A roman volume numeral.
    Numeral,
    /// Review sentiment adjective ("fantastic", "enttäuschend").
    Sentiment,
    /// Reviewer reaction verb ("thrilled", "gerührt").
    Reaction,
    /// Review rating phrase ("5/5 stars").
    Rating,
    /// Reviewed aspect of the book ("plot", "Schreibstil").
    Aspect,
    /// Review opening phrase.
    Opening,
    /// Kind of book named in a review ("this novella").
    BookKind,
    /// Kind of reader speaking in a review ("literary critic").
    ReaderKind,
    /// Review superlative ("breathtaking").
    Superlative,
    /// A rendered filler sentence.
    Sentence,
}

impl Slot {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "adjective" => Some(Self::Adjective),
            "noun" => Some(Self::Noun),
            "place" => Some(Self::Place),
            "verb" => Some(Self::Verb),
            "name" => Some(Self::GivenName),
            "surname" => Some(Self::Surname),
            "numeral" => Some(Self::Numeral),
            "sentiment" => Some(Self::Sentiment),
            "reaction" => Some(Self::Reaction),
            "rating" => Some(Self::Rating),
            "aspect" => Some(Self::Aspect),
            "opening" => Some(Self::Opening),
            "book_kind" => Some(Self::BookKind),
            "reader_kind" => Some(Self::ReaderKind),
            "superlative" => Some(Self::Superlative),
            "sentence" => Some(Self::Sentence),
            _ => None,
        }
    }
}

/// One token of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, emitted verbatim.
    Literal(String),
    /// A placeholder resolved at render time.
    Slot(Slot),
}

/// A pattern parsed into its token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

/// Errors raised while parsing a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{...}` placeholder names no known slot.
    #[error("unknown placeholder {{{name}}} in pattern {pattern:?}")]
    UnknownPlaceholder {
        /// The unrecognized placeholder name.
        name: String,
        /// The full pattern being parsed.
        pattern: String,
    },

    /// A `{` was never closed.
    #[error("unclosed placeholder in pattern {pattern:?}")]
    UnclosedPlaceholder {
        /// The full pattern being parsed.
        pattern: String,
    },
}

impl Template {
    /// Parse a pattern string into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if a placeholder is unknown or unclosed.
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let Some(close) = after_open.find('}') else {
                return Err(TemplateError::UnclosedPlaceholder {
                    pattern: pattern.to_owned(),
                });
            };
            let name = &after_open[..close];
            let Some(slot) = Slot::from_name(name) else {
                return Err(TemplateError::UnknownPlaceholder {
                    name: name.to_owned(),
                    pattern: pattern.to_owned(),
                });
            };
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Slot(slot));
            rest = &after_open[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self { tokens })
    }

    /// The parsed token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("Midnight Ink").unwrap();
        assert_eq!(
            template.tokens(),
            &[Token::Literal("Midnight Ink".to_owned())]
        );
    }

    #[test]
    fn test_parse_mixed_literals_and_slots() {
        let template = Template::parse("The {noun} of {place}").unwrap();
        assert_eq!(
            template.tokens(),
            &[
                Token::Literal("The ".to_owned()),
                Token::Slot(Slot::Noun),
                Token::Literal(" of ".to_owned()),
                Token::Slot(Slot::Place),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_slots() {
        let template = Template::parse("{adjective}{noun}").unwrap();
        assert_eq!(
            template.tokens(),
            &[Token::Slot(Slot::Adjective), Token::Slot(Slot::Noun)]
        );
    }

    #[test]
    fn test_parse_slot_at_start_and_end() {
        let template = Template::parse("{name}'s {adjective} {noun}").unwrap();
        assert_eq!(template.tokens().len(), 5);
        assert_eq!(template.tokens()[0], Token::Slot(Slot::GivenName));
        assert_eq!(template.tokens()[4], Token::Slot(Slot::Noun));
    }

    #[test]
    fn test_parse_unknown_placeholder_is_rejected() {
        let err = Template::parse("The {dragon} rises").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownPlaceholder {
                name: "dragon".to_owned(),
                pattern: "The {dragon} rises".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_unclosed_placeholder_is_rejected() {
        let err = Template::parse("The {noun of it all").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnclosedPlaceholder {
                pattern: "The {noun of it all".to_owned(),
            }
        );
    }

    #[test]
    fn test_repeated_slot_appears_once_per_occurrence() {
        let template = Template::parse("{noun} and {noun}").unwrap();
        let occurrences = template
            .tokens()
            .iter()
            .filter(|token| matches!(token, &&Token::Slot(Slot::Noun)))
            .count();
        assert_eq!(occurrences, 2);
    }
}

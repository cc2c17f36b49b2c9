//! Locale grammar engine.
//!
//! One [`Grammar`] per supported locale, constructed once (patterns parsed
//! into token templates at that point) and selected through [`grammar_for`].
//! Every rendering method draws from the caller's [`DeterministicRng`] in a
//! fixed order, so the draw sequence for a whole record is reproducible.

use std::sync::LazyLock;

use bookforge_core::locale::Locale;
use bookforge_core::rng::{DeterministicRng, pick};

use crate::locales::{self, LOREM_WORDS, LocaleData, NUMERALS};
use crate::template::{Slot, Template, Token};

/// Probability that a title gets a colon-separated subtitle.
const SUBTITLE_PROBABILITY: f64 = 0.4;

/// Probability that a title gets a trailing dash tagline.
const TAGLINE_PROBABILITY: f64 = 0.3;

/// Rendering seam for one locale's grammar.
///
/// Adding a locale means adding one table set and registering it in
/// [`grammar_for`]; nothing downstream branches on the locale tag.
pub trait LocaleGrammar: Send + Sync {
    /// The locale these tables belong to.
    fn locale(&self) -> Locale;

    /// Render a book title, with optional subtitle and tagline.
    fn title(&self, rng: &mut dyn DeterministicRng) -> String;

    /// Render a publisher name.
    fn publisher(&self, rng: &mut dyn DeterministicRng) -> String;

    /// Render an author name in the locale's conventional order.
    fn author_name(&self, rng: &mut dyn DeterministicRng) -> String;

    /// Render a reviewer's full name (always given-name-first).
    fn reviewer_name(&self, rng: &mut dyn DeterministicRng) -> String;

    /// Render one review: capitalized, with terminal punctuation.
    fn review(&self, rng: &mut dyn DeterministicRng) -> String;

    /// Render `count` reviews in order.
    fn reviews(&self, rng: &mut dyn DeterministicRng, count: usize) -> Vec<String> {
        (0..count).map(|_| self.review(rng)).collect()
    }
}

/// Table-driven grammar: parsed pattern templates plus word lists.
pub struct Grammar {
    locale: Locale,
    titles: Vec<Template>,
    subtitles: Vec<Template>,
    reviews: Vec<Template>,
    imprint: Template,
    data: LocaleData,
}

impl Grammar {
    fn new(locale: Locale, data: LocaleData) -> Self {
        let parse_all = |patterns: &[&str]| -> Vec<Template> {
            patterns
                .iter()
                .map(|pattern| {
                    Template::parse(pattern).expect("locale pattern tables must parse")
                })
                .collect()
        };

        Self {
            locale,
            titles: parse_all(data.title_patterns),
            subtitles: parse_all(data.subtitle_patterns),
            reviews: parse_all(data.review_patterns),
            imprint: Template::parse(data.imprint_pattern)
                .expect("locale pattern tables must parse"),
            data,
        }
    }

    /// Expand a template, resolving each placeholder with one independent
    /// draw (sentences consume one length draw plus one draw per word).
    fn expand(&self, template: &Template, rng: &mut dyn DeterministicRng) -> String {
        let mut out = String::new();
        for token in template.tokens() {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Slot(slot) => self.fill(*slot, rng, &mut out),
            }
        }
        out
    }

    fn fill(&self, slot: Slot, rng: &mut dyn DeterministicRng, out: &mut String) {
        let list = match slot {
            Slot::Sentence => {
                out.push_str(&lorem_sentence(rng));
                return;
            }
            Slot::Adjective => self.data.adjectives,
            Slot::Noun => self.data.nouns,
            Slot::Place => self.data.places,
            Slot::Verb => self.data.verbs,
            Slot::GivenName => self.data.given_names,
            Slot::Surname => self.data.family_names,
            Slot::Numeral => NUMERALS,
            Slot::Sentiment => self.data.sentiments,
            Slot::Reaction => self.data.reactions,
            Slot::Rating => self.data.ratings,
            Slot::Aspect => self.data.aspects,
            Slot::Opening => self.data.openings,
            Slot::BookKind => self.data.book_kinds,
            Slot::ReaderKind => self.data.reader_kinds,
            Slot::Superlative => self.data.superlatives,
        };
        out.push_str(pick(rng, list));
    }

    fn pick_template<'a>(
        &self,
        templates: &'a [Template],
        rng: &mut dyn DeterministicRng,
    ) -> &'a Template {
        &templates[rng.pick_index(templates.len())]
    }
}

impl LocaleGrammar for Grammar {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn title(&self, rng: &mut dyn DeterministicRng) -> String {
        let template = self.pick_template(&self.titles, rng);
        let mut title = self.expand(template, rng);

        if rng.chance(SUBTITLE_PROBABILITY) {
            let subtitle = self.pick_template(&self.subtitles, rng);
            title.push_str(": ");
            title.push_str(&self.expand(subtitle, rng));
        }
        if rng.chance(TAGLINE_PROBABILITY) {
            title.push_str(" - ");
            title.push_str(pick(rng, self.data.taglines));
        }
        title
    }

    fn publisher(&self, rng: &mut dyn DeterministicRng) -> String {
        // Slot 0 is the company-style imprint; the rest are fixed houses.
        let index = rng.pick_index(self.data.publisher_houses.len() + 1);
        if index == 0 {
            self.expand(&self.imprint, rng)
        } else {
            self.data.publisher_houses[index - 1].to_owned()
        }
    }

    fn author_name(&self, rng: &mut dyn DeterministicRng) -> String {
        let given = pick(rng, self.data.given_names);
        let family = pick(rng, self.data.family_names);
        if self.data.family_name_first {
            format!("{family}, {given}")
        } else {
            format!("{given} {family}")
        }
    }

    fn reviewer_name(&self, rng: &mut dyn DeterministicRng) -> String {
        let given = pick(rng, self.data.given_names);
        let family = pick(rng, self.data.family_names);
        format!("{given} {family}")
    }

    fn review(&self, rng: &mut dyn DeterministicRng) -> String {
        let template = self.pick_template(&self.reviews, rng);
        let mut review = capitalize_first(&self.expand(template, rng));
        if !review.ends_with(['.', '!', '?']) {
            review.push('.');
        }
        review
    }
}

/// A lorem-style filler sentence: 5–9 words, capitalized, terminal period.
fn lorem_sentence(rng: &mut dyn DeterministicRng) -> String {
    let word_count = rng.next_u32_range(5, 9) as usize;
    let mut sentence = String::new();
    for i in 0..word_count {
        if i > 0 {
            sentence.push(' ');
        }
        sentence.push_str(pick(rng, LOREM_WORDS));
    }
    let mut sentence = capitalize_first(&sentence);
    sentence.push('.');
    sentence
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

static ENGLISH: LazyLock<Grammar> = LazyLock::new(|| Grammar::new(Locale::En, locales::ENGLISH));
static GERMAN: LazyLock<Grammar> = LazyLock::new(|| Grammar::new(Locale::De, locales::GERMAN));
static FRENCH: LazyLock<Grammar> = LazyLock::new(|| Grammar::new(Locale::Fr, locales::FRENCH));

/// Look up the grammar for a normalized locale tag.
#[must_use]
pub fn grammar_for(locale: Locale) -> &'static dyn LocaleGrammar {
    match locale {
        Locale::En => &*ENGLISH,
        Locale::De => &*GERMAN,
        Locale::Fr => &*FRENCH,
    }
}

//! ISBN-13 generation and validation.

use bookforge_core::locale::Locale;
use bookforge_core::rng::DeterministicRng;

/// The hyphenated registration-group prefix for a locale's catalog.
#[must_use]
pub const fn prefix(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "978-0",
        Locale::De => "978-3",
        Locale::Fr => "978-2",
    }
}

/// Generate a checksum-valid ISBN-13 as `prefix-dddddddd-c`.
///
/// The four prefix digits plus eight drawn digits form the first twelve
/// digits; the thirteenth is the weighted check digit. Consumes exactly
/// eight digit draws.
pub fn generate(locale: Locale, rng: &mut dyn DeterministicRng) -> String {
    let prefix = prefix(locale);

    let mut digits: Vec<u8> = prefix
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut body = String::with_capacity(8);
    for _ in 0..8 {
        let digit = rng.next_digit();
        digits.push(digit);
        body.push(char::from(b'0' + digit));
    }

    let check = check_digit(&digits);
    format!("{prefix}-{body}-{check}")
}

/// The ISBN-13 check digit: alternating ×1/×3 weights over the first
/// twelve digits, starting with ×1.
fn check_digit(digits: &[u8]) -> u8 {
    debug_assert_eq!(digits.len(), 12);
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            u32::from(d) * weight
        })
        .sum();
    #[allow(clippy::cast_possible_truncation)]
    {
        ((10 - sum % 10) % 10) as u8
    }
}

/// Whether a hyphenated ISBN-13 string carries a valid checksum.
#[must_use]
pub fn is_valid(isbn: &str) -> bool {
    let digits: Vec<u8> = isbn
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let Some((&check, first_twelve)) = digits.split_last() else {
        return false;
    };
    first_twelve.len() == 12 && check_digit(first_twelve) == check
}

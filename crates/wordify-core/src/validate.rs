//! Integer-representation validation with diagnostic hints.
//!
//! [`is_valid_integer_representation`] is the yes/no check; the REPL and
//! one-shot commands call [`validate_with_hints`] to learn *why* an input
//! was rejected. Classification is an ordered rule list: the first rule
//! that matches wins, so every invalid string maps to exactly one hint
//! even when several problems are present.
//!
//! Digits are ASCII `0`-`9` only. A locale-aware digit predicate would
//! accept Devanagari or CJK numerals that the wordifier cannot render, so
//! those are rejected as [`Hint::NonAscii`] instead.

use std::fmt;

use serde::Serialize;

use crate::dictionary::{MAX_DIGITS, last_scale};

/// Why a string is not a valid integer representation.
///
/// When several problems are present exactly one hint is reported: the
/// length bound (`TooLong`) is checked first, then the remaining
/// variants in the order listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hint {
    /// Nothing was entered.
    Empty,
    /// A lone `-` with nothing after it.
    NegativeWhat,
    /// `-0` is not an integer.
    NegativeZero,
    /// A multi-digit number starting with `0`.
    LeadingZero,
    /// A `-` anywhere past the first character.
    ExtraDash,
    /// A decimal point.
    Fraction,
    /// A character outside the ASCII range.
    NonAscii,
    /// Whitespace inside the number.
    Whitespace,
    /// Some other non-digit character.
    Mixed,
    /// More digits than the scale table can name.
    TooLong,
    /// Fallback classification; unreachable while the character scan
    /// covers every non-digit, but kept as a safety net.
    Invalid,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("The number is empty."),
            Self::NegativeWhat => f.write_str("Negative what? There is nothing after the '-'."),
            Self::NegativeZero => f.write_str("Negative zero is not an integer."),
            Self::LeadingZero => f.write_str("Numbers starting with 0 are hex numbers."),
            Self::ExtraDash => {
                f.write_str("There can only be one '-' at the beginning of the number.")
            }
            Self::Fraction => f.write_str("Fractional numbers are not supported."),
            Self::NonAscii => f.write_str("Only the ASCII numerals 0-9 are supported."),
            Self::Whitespace => f.write_str("A valid number doesn't contain whitespace."),
            Self::Mixed => {
                f.write_str("Numbers can only contain the numerals 0-9 and start with a -.")
            }
            Self::TooLong => write!(
                f,
                "Numbers longer than {MAX_DIGITS} digits (past the {} scale) are not supported.",
                last_scale()
            ),
            Self::Invalid => f.write_str("The number is invalid."),
        }
    }
}

/// Split off a single leading `-`, reporting whether one was present.
fn split_sign(number: &str) -> (&str, bool) {
    number
        .strip_prefix('-')
        .map_or((number, false), |rest| (rest, true))
}

/// Test that the string is a valid integer representation of any length
/// up to [`MAX_DIGITS`], positive or negative.
///
/// Valid means: at most one leading `-`, a non-empty remainder that is
/// either exactly `"0"` (only when positive) or free of leading zeros,
/// and nothing but ASCII digits.
pub fn is_valid_integer_representation(number: &str) -> bool {
    let (digits, is_negative) = split_sign(number);

    if digits.is_empty() || digits.chars().count() > MAX_DIGITS {
        return false;
    }

    // "0" is fine, "007" and "-0" are not
    if digits.starts_with('0') && (is_negative || digits.len() > 1) {
        return false;
    }

    digits.bytes().all(|b| b.is_ascii_digit())
}

/// Classify an invalid representation, or `None` when the input is valid.
///
/// The rules run in a fixed order (length bound, emptiness, leading
/// zeros, then a left-to-right character scan), so the result is
/// deterministic and total. See [`Hint`] for the precedence.
#[tracing::instrument(level = "debug")]
pub fn validate_with_hints(number: &str) -> Option<Hint> {
    if is_valid_integer_representation(number) {
        return None;
    }

    let (rest, is_negative) = split_sign(number);

    // Characters, not bytes: a long run of multi-byte numerals must fall
    // through to the character scan, not trip the length bound early
    if rest.chars().count() > MAX_DIGITS {
        return Some(Hint::TooLong);
    }

    if rest.is_empty() {
        return Some(if is_negative {
            Hint::NegativeWhat
        } else {
            Hint::Empty
        });
    }

    if rest.starts_with('0') {
        if is_negative && rest.len() == 1 {
            return Some(Hint::NegativeZero);
        }
        if rest.len() > 1 {
            return Some(Hint::LeadingZero);
        }
    }

    // First offending character decides
    for c in rest.chars() {
        let hint = match c {
            '0'..='9' => continue,
            '-' => Hint::ExtraDash,
            '.' => Hint::Fraction,
            c if !c.is_ascii() => Hint::NonAscii,
            c if c.is_whitespace() => Hint::Whitespace,
            _ => Hint::Mixed,
        };
        return Some(hint);
    }

    Some(Hint::Invalid)
}

/// The largest magnitude the validator accepts: [`MAX_DIGITS`] nines.
pub fn max_integer_representation() -> String {
    "9".repeat(MAX_DIGITS)
}

/// The smallest (most negative) representation the validator accepts.
pub fn min_integer_representation() -> String {
    format!("-{}", max_integer_representation())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Zero-width space: invisible, but not whitespace and not ASCII
    const INVISIBLE_WHITESPACE: &str = "123\u{200b}456";

    fn valid_strings() -> Vec<String> {
        vec![
            "-123".to_string(),
            "0".to_string(),
            "123".to_string(),
            "89038450983409580934850934850834".to_string(),
            max_integer_representation(),
            min_integer_representation(),
        ]
    }

    fn invalid_strings_with_hints() -> Vec<(String, Hint)> {
        vec![
            (String::new(), Hint::Empty),
            (" ".to_string(), Hint::Whitespace),
            (INVISIBLE_WHITESPACE.to_string(), Hint::NonAscii),
            ("abc".to_string(), Hint::Mixed),
            ("100c".to_string(), Hint::Mixed),
            ("--100".to_string(), Hint::ExtraDash),
            ("100-000".to_string(), Hint::ExtraDash),
            ("100-".to_string(), Hint::ExtraDash),
            ("07".to_string(), Hint::LeadingZero),
            ("007".to_string(), Hint::LeadingZero),
            ("1.0".to_string(), Hint::Fraction),
            ("123E234".to_string(), Hint::Mixed),
            ("-0".to_string(), Hint::NegativeZero),
            ("-".to_string(), Hint::NegativeWhat),
            ("- ".to_string(), Hint::Whitespace),
            ("- 123".to_string(), Hint::Whitespace),
            (" -123".to_string(), Hint::Whitespace),
            (".".to_string(), Hint::Fraction),
            ("१२३४५६७८९".to_string(), Hint::NonAscii),
            ("一二".to_string(), Hint::NonAscii),
            (format!("{}9", max_integer_representation()), Hint::TooLong),
            (format!("-{}9", max_integer_representation()), Hint::TooLong),
        ]
    }

    #[test]
    fn valid_representations_pass() {
        for number in valid_strings() {
            assert!(
                is_valid_integer_representation(&number),
                "expected {number:?} to be valid"
            );
            assert_eq!(validate_with_hints(&number), None);
        }
    }

    #[test]
    fn invalid_representations_fail() {
        for (number, _) in invalid_strings_with_hints() {
            assert!(
                !is_valid_integer_representation(&number),
                "expected {number:?} to be invalid"
            );
        }
    }

    #[test]
    fn hints_match_first_applicable_rule() {
        for (number, hint) in invalid_strings_with_hints() {
            assert_eq!(
                validate_with_hints(&number),
                Some(hint),
                "wrong hint for {number:?}"
            );
        }
    }

    #[test]
    fn length_bound_counts_characters_not_bytes() {
        // 13 CJK numerals are 39 bytes but only 13 characters, well
        // under the digit bound: the scan must classify them
        let short = "一".repeat(13);
        assert_eq!(validate_with_hints(&short), Some(Hint::NonAscii));

        // Past the bound in characters, the length rule wins
        let long = "一".repeat(MAX_DIGITS + 1);
        assert_eq!(validate_with_hints(&long), Some(Hint::TooLong));
    }

    #[test]
    fn max_representation_is_all_nines_and_valid() {
        let max = max_integer_representation();
        assert_eq!(max.len(), MAX_DIGITS);
        assert!(max.bytes().all(|b| b == b'9'));
        assert_eq!(validate_with_hints(&max), None);
    }

    #[test]
    fn one_digit_past_max_is_too_long() {
        let over = format!("{}9", max_integer_representation());
        assert_eq!(validate_with_hints(&over), Some(Hint::TooLong));
    }

    #[test]
    fn too_long_message_names_the_last_scale() {
        let message = Hint::TooLong.to_string();
        assert!(message.contains(last_scale()));
        assert!(message.contains(&MAX_DIGITS.to_string()));
    }

    #[test]
    fn hints_serialize_as_kebab_case() {
        let json = serde_json::to_string(&Hint::LeadingZero).unwrap();
        assert_eq!(json, "\"leading-zero\"");
    }
}

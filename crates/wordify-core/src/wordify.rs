//! Conversion of integer representations to English words.
//!
//! `"1234"` becomes `"One thousand two hundred and thirty four"`. The
//! digit string is partitioned into base-1000 groups, each group is
//! rendered by the recursive 0-999 renderer [`small_int_to_words`], and
//! scale words from the [`dictionary`](crate::dictionary) are attached
//! to every non-terminal group.
//!
//! The conjunction "and" appears in exactly one place: between the
//! terminal group's hundreds and its remainder ("one hundred and one"),
//! or before a terminal group under one hundred when higher groups exist
//! ("one thousand and one"). Non-terminal groups never carry it: "one
//! hundred twenty three thousand four hundred and fifty six".

use crate::dictionary::{AND, HUNDRED, NEGATIVE, ONE_TO_NINETEEN, SPACE, TENS, THOUSAND_SCALES};
use crate::error::{WordifyError, WordifyResult};
use crate::validate;

/// Convert the string representation of an integer to English words.
///
/// e.g. `"1234"` → `"One thousand two hundred and thirty four"`.
///
/// The input must pass
/// [`is_valid_integer_representation`](validate::is_valid_integer_representation);
/// anything else fails fast with [`WordifyError::InvalidInput`] rather
/// than producing garbage output.
#[tracing::instrument(level = "debug")]
pub fn number_to_words(number: &str) -> WordifyResult<String> {
    if let Some(hint) = validate::validate_with_hints(number) {
        return Err(WordifyError::InvalidInput { hint });
    }

    let (digits, is_negative) = match number.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (number, false),
    };

    let groups = group_digits(digits);
    let mut parts: Vec<String> = Vec::new();

    if is_negative {
        push_words(&mut parts, NEGATIVE.to_string());
    }

    let last = groups.len() - 1;
    for (i, &group) in groups.iter().enumerate() {
        if i == last {
            // The one case that renders 'zero'
            if groups.len() == 1 && group == 0 {
                push_words(&mut parts, ONE_TO_NINETEEN[0].to_string());
            }

            // 'and' joins the terminal group when higher groups exist,
            // or inside a lone group past one hundred
            let with_and = groups.len() > 1 || group > 100;
            push_words(&mut parts, small_int_to_words(group, with_and));
        } else if group != 0 {
            push_words(&mut parts, small_int_to_words(group, false));
            push_words(&mut parts, THOUSAND_SCALES[groups.len() - 2 - i].to_string());
        }
    }

    Ok(parts.join(SPACE))
}

/// Append a fragment, skipping empty strings and capitalizing the first
/// word of the phrase.
fn push_words(parts: &mut Vec<String>, words: String) {
    if words.is_empty() {
        return;
    }
    if parts.is_empty() {
        let mut chars = words.chars();
        let capitalized = chars.next().map_or(words.clone(), |first| {
            first.to_uppercase().chain(chars).collect()
        });
        parts.push(capitalized);
    } else {
        parts.push(words);
    }
}

/// Render an integer from 1 to 999 as English words.
///
/// e.g. `45` → `"forty five"`, `450` → `"four hundred fifty"`. With
/// `with_and` set, an "and" joins the hundreds to the remainder
/// (`450` → `"four hundred and fifty"`) or prefixes a value under one
/// hundred (`45` → `"and forty five"`, as in "one thousand and forty
/// five"). Out-of-range values render as the empty string, the caller's
/// signal that there is nothing to emit.
pub fn small_int_to_words(n: u16, with_and: bool) -> String {
    let and = if with_and {
        format!("{AND}{SPACE}")
    } else {
        String::new()
    };

    if n == 0 || n >= 1000 {
        return String::new();
    }
    let n = n as usize;

    if n < 20 {
        return format!("{and}{}", ONE_TO_NINETEEN[n]);
    }
    if n < 100 {
        if n % 10 == 0 {
            return format!("{and}{}", TENS[n / 10]);
        }
        return format!(
            "{and}{}{SPACE}{}",
            TENS[n / 10],
            small_int_to_words((n % 10) as u16, false)
        );
    }
    if n % 100 == 0 {
        return format!("{}{SPACE}{HUNDRED}", ONE_TO_NINETEEN[n / 100]);
    }
    // Round hundreds first, then the remainder carries the 'and'
    format!(
        "{}{SPACE}{}",
        small_int_to_words(((n / 100) * 100) as u16, false),
        small_int_to_words((n % 100) as u16, with_and)
    )
}

/// Partition a non-negative digit string into base-1000 groups, most
/// significant first. A partial leftmost chunk is implicitly left-padded
/// with zeros, so `"1234"` yields `[1, 234]`.
fn group_digits(digits: &str) -> Vec<u16> {
    let bytes = digits.as_bytes();
    let lead = bytes.len() % 3;
    let mut groups = Vec::with_capacity(bytes.len().div_ceil(3));

    if lead > 0 {
        groups.push(parse_group(&bytes[..lead]));
    }
    for chunk in bytes[lead..].chunks(3) {
        groups.push(parse_group(chunk));
    }
    groups
}

/// Parse up to three ASCII digits into their value.
fn parse_group(chunk: &[u8]) -> u16 {
    chunk
        .iter()
        .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

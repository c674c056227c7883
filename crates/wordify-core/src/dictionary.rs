//! Static English word and scale tables.
//!
//! The tables are module-level constants consulted by the validator and
//! the wordifier. The scale table doubles as the capacity limit: the
//! validator accepts at most [`MAX_DIGITS`] digits, three for the units
//! group plus three per named scale.

/// Words for the values zero through nineteen, indexed by value.
pub const ONE_TO_NINETEEN: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for multiples of ten, indexed by the tens digit.
///
/// Slots 0 and 1 are unused; values below twenty live in
/// [`ONE_TO_NINETEEN`].
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// The word joining a hundreds digit to its magnitude.
pub const HUNDRED: &str = "hundred";

/// The conjunction inserted between a hundreds group and its remainder.
pub const AND: &str = "and";

/// The word prefixed to phrases for negative numbers.
pub const NEGATIVE: &str = "negative";

/// Separator between phrase fragments.
pub const SPACE: &str = " ";

/// Scale names for powers of one thousand, starting at 10^3.
pub const THOUSAND_SCALES: [&str; 11] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Longest digit string the validator accepts.
pub const MAX_DIGITS: usize = 3 + 3 * THOUSAND_SCALES.len();

/// Number of configured scale names.
pub const fn num_scales() -> usize {
    THOUSAND_SCALES.len()
}

/// Name of the highest configured scale.
pub const fn last_scale() -> &'static str {
    THOUSAND_SCALES[THOUSAND_SCALES.len() - 1]
}

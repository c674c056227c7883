//! Command implementations.

use serde::Serialize;
use wordify_core::Hint;

pub mod check;
pub mod convert;
pub mod info;
pub mod limits;
pub mod repl;

/// JSON report shared by the `convert` and `check` commands.
///
/// Exactly one of `words` and `hint` is present: `words` for valid
/// input, `hint` (the classification) plus `message` (the human-readable
/// explanation) otherwise.
#[derive(Serialize)]
pub struct ConversionReport<'a> {
    /// The input as entered.
    pub input: &'a str,
    /// Whether the input passed validation.
    pub valid: bool,
    /// English words for a valid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    /// Diagnostic classification for an invalid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<Hint>,
    /// Human-readable explanation of the hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> ConversionReport<'a> {
    /// Report for input that passed validation.
    pub const fn valid(input: &'a str, words: Option<String>) -> Self {
        Self {
            input,
            valid: true,
            words,
            hint: None,
            message: None,
        }
    }

    /// Report for input the validator rejected.
    pub fn invalid(input: &'a str, hint: Hint) -> Self {
        Self {
            input,
            valid: false,
            words: None,
            hint: Some(hint),
            message: Some(hint.to_string()),
        }
    }
}

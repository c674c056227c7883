//! Limits command — the largest and smallest supported representations.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordify_core::dictionary::{MAX_DIGITS, last_scale, num_scales};
use wordify_core::{max_integer_representation, min_integer_representation, number_to_words};

/// Arguments for the `limits` subcommand.
#[derive(Args, Debug, Default)]
pub struct LimitsArgs {
    /// Also print the English words for both limits.
    #[arg(long)]
    pub words: bool,
}

#[derive(Serialize)]
struct LimitsReport {
    max: String,
    min: String,
    digits: usize,
    scales: usize,
    last_scale: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_words: Option<String>,
}

/// Print the bounds implied by the scale table.
#[instrument(name = "cmd_limits", skip_all)]
pub fn cmd_limits(args: LimitsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = args.words, "executing limits command");

    let max = max_integer_representation();
    let min = min_integer_representation();
    let (max_words, min_words) = if args.words {
        (Some(number_to_words(&max)?), Some(number_to_words(&min)?))
    } else {
        (None, None)
    };

    if global_json {
        let report = LimitsReport {
            max,
            min,
            digits: MAX_DIGITS,
            scales: num_scales(),
            last_scale: last_scale(),
            max_words,
            min_words,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {MAX_DIGITS} digits, up to the {} scale",
        "Supported:".bold(),
        last_scale(),
    );
    println!("{} {max}", "Largest: ".dimmed());
    if let Some(words) = max_words {
        println!("  {words}");
    }
    println!("{} {min}", "Smallest:".dimmed());
    if let Some(words) = min_words {
        println!("  {words}");
    }

    Ok(())
}

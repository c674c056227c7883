//! Check command — validate an integer representation.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordify_core::validate_with_hints;

use super::ConversionReport;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Integer representation to validate.
    #[arg(allow_hyphen_values = true)]
    pub number: String,
}

/// Validate a string without converting it.
#[instrument(name = "cmd_check", skip_all, fields(number = %args.number))]
pub fn cmd_check(args: CheckArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(number = %args.number, "executing check command");

    match validate_with_hints(&args.number) {
        None => {
            if global_json {
                let report = ConversionReport::valid(&args.number, None);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} {} is a valid integer representation",
                    "PASS:".green(),
                    args.number,
                );
            }
        }
        Some(hint) => {
            if global_json {
                let report = ConversionReport::invalid(&args.number, hint);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                bail!("{hint}");
            }
        }
    }

    Ok(())
}

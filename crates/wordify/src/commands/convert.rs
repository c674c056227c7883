//! Convert command — integer representation to English words.

use anyhow::bail;
use clap::Args;
use tracing::{debug, instrument};

use wordify_core::{WordifyError, number_to_words};

use super::ConversionReport;

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Integer representation to convert (e.g. "1234" or "-56").
    #[arg(allow_hyphen_values = true)]
    pub number: String,
}

/// Convert an integer representation to English words.
///
/// Valid input prints the phrase to stdout; invalid input fails with the
/// diagnostic hint. With `--json`, a [`ConversionReport`] is printed for
/// both outcomes and the exit status stays zero.
#[instrument(name = "cmd_convert", skip_all, fields(number = %args.number))]
pub fn cmd_convert(args: ConvertArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(number = %args.number, "executing convert command");

    match number_to_words(&args.number) {
        Ok(words) => {
            if global_json {
                let report = ConversionReport::valid(&args.number, Some(words));
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{words}");
            }
        }
        Err(WordifyError::InvalidInput { hint }) => {
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

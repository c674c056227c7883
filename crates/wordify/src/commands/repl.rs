//! Repl command — interactive number wordification.
//!
//! Reads one trimmed line at a time, recognizes the control tokens
//! `q`/`quit`/`x`/`exit`, `h`/`help`, `max`, and `min`, and otherwise
//! prints the English words for the entered integer on stdout, or a hint
//! on stderr explaining why it is not one.

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::{debug, instrument};

use wordify_core::{
    max_integer_representation, min_integer_representation, number_to_words, validate_with_hints,
};

/// Arguments for the `repl` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReplArgs {
    /// Skip the welcome banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// Re-prompt shown after every hint.
const INSTRUCTIONS: &str = "Please enter an integer to wordify (q to quit):";

/// Run the interactive loop over stdin/stdout/stderr.
#[instrument(name = "cmd_repl", skip_all)]
pub fn cmd_repl(args: ReplArgs, quiet_repl: bool) -> anyhow::Result<()> {
    debug!(no_banner = args.no_banner, "entering repl");

    let banner = !(args.no_banner || quiet_repl);
    let stdin = io::stdin();
    run(stdin.lock(), io::stdout(), io::stderr(), banner)
}

/// The loop itself, generic over streams so tests can drive it.
fn run(
    input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
    banner: bool,
) -> anyhow::Result<()> {
    if banner {
        writeln!(out, "{}", welcome_message())?;
    }
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        let entry = line.trim();

        match entry {
            "q" | "quit" | "x" | "exit" => break,
            "h" | "help" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            _ => {}
        }

        let number = match entry {
            "max" => max_integer_representation(),
            "min" => min_integer_representation(),
            other => other.to_string(),
        };

        match validate_with_hints(&number) {
            Some(hint) => writeln!(err, "{hint} {INSTRUCTIONS}")?,
            None => {
                let words = number_to_words(&number)?;
                writeln!(out)?;
                writeln!(out, "{words}")?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

const HELP: &str = "\
Quit by entering 'q' or 'quit'. See this message again with 'h' or 'help'.
Enter 'max' to see the largest number supported, or 'min' to see the smallest.
Please enter an integer to wordify:";

fn welcome_message() -> String {
    let line = format!("Welcome to wordify version {}", env!("CARGO_PKG_VERSION"));
    let rule = "-".repeat(line.len());
    format!("{rule}\n{line}\n{rule}")
}

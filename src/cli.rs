use std::path::PathBuf;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, ValueHint};

mod logging;
mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "safe-replace",
    version,
    about = "Replace the first exact occurrence of a string in a file, verify it, roll back on failure",
    long_about = None
)]
pub struct Args {
    /// File to edit
    #[arg(value_name = "FILE_PATH", value_hint = ValueHint::FilePath)]
    pub file_path: PathBuf,

    /// Exact text to find (first occurrence only, no patterns)
    #[arg(value_name = "OLD_STRING", value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
    pub old_string: String,

    /// Text to put in its place (may be empty)
    #[arg(value_name = "NEW_STRING", allow_hyphen_values = true)]
    pub new_string: String,

    /// Re-read the file after writing and confirm the change (default)
    #[arg(long = "verify", action = ArgAction::SetTrue)]
    pub verify: bool,

    /// Trust the write and skip the read-back check
    #[arg(long = "no-verify", action = ArgAction::SetTrue)]
    pub no_verify: bool,

    /// Output JSON instead of the text summary
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Verbose logging (repeat for more)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Verification stays on unless `--no-verify` is given without `--verify`.
    pub fn should_verify(&self) -> bool {
        self.verify || !self.no_verify
    }
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the replacement fails or output cannot be rendered.
pub fn run() -> Result<()> {
    let args = parse_args();
    logging::init(args.verbose);
    run_impl::run_with_args(args)
}

// Argument errors exit with 1 like every other failure; help and version exit 0.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        let code = i32::from(err.use_stderr());
        let _ = err.print();
        std::process::exit(code);
    })
}

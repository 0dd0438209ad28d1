// crates/crlfe-cli/src/main.rs

use clap::Parser;
use std::process::ExitCode;

use crlfe_core::{convert_in_place, Outcome, ValidatedPath};

mod help;
mod report;

#[derive(Parser)]
#[command(name = "crlfe")]
#[command(about = "Control Return Line Feed Eliminator", long_about = None)]
pub struct Cli {
    /// File to convert from CRLF to LF, in place
    pub file_path: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Usage errors never reach the validator: both terminal states print
    // the fixed help text and fail.
    let Some(raw) = cli.file_path else {
        help::print();
        return ExitCode::FAILURE;
    };
    if !raw.contains(std::path::MAIN_SEPARATOR) {
        help::print();
        return ExitCode::FAILURE;
    }

    match run(&raw) {
        Ok(Outcome::AlreadyUnix) => {
            report::warning("no CRLF found, file already has unix line endings");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Converted { replaced }) => {
            println!("converted {raw}: replaced {replaced} CRLF sequence(s)");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report::fatal(&err, &raw);
            ExitCode::FAILURE
        }
    }
}

/// Validate then convert. Every failure comes back as a value; only `main`
/// decides the exit status.
fn run(raw: &str) -> crlfe_core::Result<Outcome> {
    let path = ValidatedPath::new(raw)?;
    convert_in_place(&path)
}

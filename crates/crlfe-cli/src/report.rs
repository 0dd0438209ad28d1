// crates/crlfe-cli/src/report.rs
//
// Console diagnostics: errors in red, warnings in yellow, both on stdout.

use crlfe_core::CrlfeError;

const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

pub fn error(text: &str) {
    println!("{RED}{text}{RESET}");
}

pub fn warning(text: &str) {
    println!("{YELLOW}{text}{RESET}");
}

/// Render a terminal failure as red diagnostics.
pub fn fatal(err: &CrlfeError, path: &str) {
    match err {
        CrlfeError::InvalidPath(_) => error("Could not read path"),
        CrlfeError::Read(_) => {
            error("--FAILURE--");
            error(&format!("Unable to read file {path}"));
        }
        CrlfeError::Write(_) => {
            error("--FAILURE--");
            error(&format!("Unable to write file {path}"));
        }
        CrlfeError::Unconverted(_) => {
            error("FAILURE");
            error("file @ path still contains CRLF");
            error("could not convert CRLF to LF");
        }
    }
}

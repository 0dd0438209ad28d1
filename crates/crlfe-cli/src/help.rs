// crates/crlfe-cli/src/help.rs

/// Fixed help text, printed to stdout on usage errors. The exit status is
/// decided by `main`.
pub fn print() {
    println!(
        "NAME
    crlfe - Control Return Line Feed Eliminator.
SYNOPSIS
    crlfe <file_path>
OPTIONS
    NULL
DESCRIPTION
    Takes windows-formatted files & converts them to LF (unix format).
    Exit Status:
    Returns success unless the file could not be found/opened or an invalid
    option is given.
IMPLEMENTATION
    crlfe contributors"
    );
}

// crates/crlfe-core/src/convert.rs

use crate::content;
use crate::eol;
use crate::error::{CrlfeError, Result};
use crate::path::ValidatedPath;

/// What a conversion run did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No CRLF present; the file was not touched.
    AlreadyUnix,
    /// CRLF was found, replaced, and verified absent on re-read.
    Converted { replaced: usize },
}

/// Read, transform, write back, then re-read and verify.
///
/// On verification failure the original buffer is NOT restored; the file
/// keeps whatever the write produced. Known limitation, kept from the
/// reference behavior.
pub fn convert_in_place(path: &ValidatedPath) -> Result<Outcome> {
    let original = content::read_bytes(path)?;

    let Some(converted) = eol::eliminate_crlf(&original) else {
        return Ok(Outcome::AlreadyUnix);
    };
    // Each pair shrinks the buffer by one byte.
    let replaced = original.len() - converted.len();

    content::write_bytes(path, &converted)?;

    let reread = content::read_bytes(path)?;
    if eol::contains_crlf(&reread) {
        return Err(CrlfeError::Unconverted(path.to_string()));
    }
    Ok(Outcome::Converted { replaced })
}

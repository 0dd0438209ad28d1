// crates/crlfe-core/src/content.rs

use crate::error::{CrlfeError, Result};
use crate::path::ValidatedPath;

/// Full binary read. The handle lives inside `fs::read` and is released on
/// every exit path, success or error.
pub fn read_bytes(path: &ValidatedPath) -> Result<Vec<u8>> {
    std::fs::read(path.as_path()).map_err(CrlfeError::Read)
}

/// Truncating binary write of the whole buffer. Handle scoped as above.
pub fn write_bytes(path: &ValidatedPath, bytes: &[u8]) -> Result<()> {
    std::fs::write(path.as_path(), bytes).map_err(CrlfeError::Write)
}

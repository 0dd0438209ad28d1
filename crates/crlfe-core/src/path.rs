// crates/crlfe-core/src/path.rs

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{CrlfeError, Result};

/// A path known, at validation time, to name an existing regular file.
///
/// The check is point-in-time: the entry can change between validation and
/// the actual read/write. That TOCTOU gap is accepted; the later I/O calls
/// surface their own errors if the file disappears underneath us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath(PathBuf);

impl ValidatedPath {
    /// Validate a user-supplied string.
    ///
    /// Succeeds only if the string contains a platform path separator and
    /// names an existing regular file that is neither a directory nor a
    /// symlink. `symlink_metadata` does not follow links, so a symlink is
    /// rejected even when its target is a regular file.
    pub fn new(raw: &str) -> Result<Self> {
        if !raw.contains(MAIN_SEPARATOR) {
            return Err(CrlfeError::InvalidPath(raw.to_string()));
        }
        let meta = std::fs::symlink_metadata(raw)
            .map_err(|_| CrlfeError::InvalidPath(raw.to_string()))?;
        let ft = meta.file_type();
        if ft.is_symlink() || !ft.is_file() {
            return Err(CrlfeError::InvalidPath(raw.to_string()));
        }
        Ok(Self(PathBuf::from(raw)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ValidatedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

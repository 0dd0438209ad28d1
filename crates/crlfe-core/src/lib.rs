pub mod content;
pub mod convert;
pub mod eol;
pub mod error;
pub mod path;

pub use crate::convert::{convert_in_place, Outcome};
pub use crate::error::{CrlfeError, Result};
pub use crate::path::ValidatedPath;

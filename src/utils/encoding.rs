//! Strict text reading for the concatenator.
//!
//! Files are read whole and must be valid UTF-8. Anything else (binary
//! content, legacy encodings) is reported as a [`ReadError`] so the caller
//! can skip the file and keep walking.

use crate::domain::ReadError;
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

//! Path and file-reading helpers

pub mod encoding;
pub mod paths;

pub use encoding::read_text;
pub use paths::{display_relative, is_same_file, resolve_output};

//! Shared CLI utilities.

use crate::domain::Exclusions;
use anyhow::Result;
use std::path::Path;

/// Reject roots that are missing or not directories before any output is touched.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}

/// Start from `defaults` (or nothing when `no_defaults`) and add the
/// names passed on the command line.
pub fn build_exclusions(
    defaults: Exclusions,
    no_defaults: bool,
    dirs: &[String],
    extensions: &[String],
    files: &[String],
) -> Exclusions {
    let base = if no_defaults { Exclusions::default() } else { defaults };
    base.with_dirs(dirs).with_extensions(extensions).with_files(files)
}

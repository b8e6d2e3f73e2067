//! Concatenated output: one `=== path ===` block per readable file.

use crate::domain::{ConcatStats, Exclusions, SkippedFile};
use crate::scan::FileScanner;
use crate::utils::{read_text, resolve_output};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of a completed concatenation run.
#[derive(Debug, Clone, Default)]
pub struct ConcatOutcome {
    pub stats: ConcatStats,
    pub skipped: Vec<SkippedFile>,
}

/// Writes header blocks to any sink, flushing after each one so a run that
/// dies midway still leaves every completed block on disk.
pub struct ConcatWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> ConcatWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, bytes_written: 0 }
    }

    /// Append `\n=== <display_path> ===\n<content>`.
    pub fn write_block(&mut self, display_path: &str, content: &str) -> std::io::Result<()> {
        let header = format!("\n=== {} ===\n", display_path);
        self.inner.write_all(header.as_bytes())?;
        self.inner.write_all(content.as_bytes())?;
        self.inner.flush()?;
        self.bytes_written += (header.len() + content.len()) as u64;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Concatenate every included file under `root` into `output`.
///
/// The output is truncated before the walk starts. Files that cannot be read
/// as UTF-8 text are logged, recorded in [`ConcatOutcome::skipped`] and left
/// out; only failures on the output file itself are returned as errors.
pub fn concatenate(root: &Path, exclusions: &Exclusions, output: &Path) -> Result<ConcatOutcome> {
    let file = File::create(output)
        .with_context(|| format!("Failed creating output file: {}", output.display()))?;
    let output_abs = resolve_output(output);
    let mut writer = ConcatWriter::new(BufWriter::new(file));

    let mut scanner = FileScanner::new(root.to_path_buf())
        .exclusions(exclusions.clone())
        .skip_path(output_abs);

    let mut skipped = Vec::new();
    let mut files_written = 0usize;

    scanner.scan(|scanned| {
        let content = match read_text(&scanned.path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Skipped {}: {}", scanned.display_path, err);
                skipped.push(SkippedFile { path: scanned.display_path, reason: err.to_string() });
                return Ok(());
            }
        };

        writer
            .write_block(&scanned.display_path, &content)
            .with_context(|| format!("Failed writing output file: {}", output.display()))?;
        debug!(path = %scanned.display_path, bytes = content.len(), "Appended file");
        files_written += 1;
        Ok(())
    })?;

    let mut stats = scanner.stats().clone();
    stats.files_written = files_written;
    stats.files_unreadable = skipped.len();
    stats.bytes_written = writer.bytes_written();

    info!(
        files = stats.files_written,
        unreadable = stats.files_unreadable,
        excluded = stats.files_excluded,
        pruned = stats.dirs_pruned,
        "Concatenation complete"
    );

    Ok(ConcatOutcome { stats, skipped })
}

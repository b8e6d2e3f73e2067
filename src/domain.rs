//! Core types shared by the concatenator and the tree printer.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONCAT_OUTPUT: &str = "all_files_combined.txt";
pub const DEFAULT_TREE_OUTPUT: &str = "tree.txt";

const CONCAT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", ".next", "public"];
const CONCAT_EXCLUDED_EXTENSIONS: &[&str] = &[".md"];
const CONCAT_EXCLUDED_FILES: &[&str] = &[".env", "package-lock.json"];

const TREE_EXCLUDED_DIRS: &[&str] = &["node_modules", ".next", ".git", "public"];
const TREE_EXCLUDED_FILES: &[&str] = &["package-lock.json"];

/// Names and extensions checked before an entry is visited.
///
/// Sets are kept as insertion-ordered vectors so the tree header lists them
/// in the order they were configured. All comparisons are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exclusions {
    pub dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub files: Vec<String>,
}

impl Exclusions {
    /// Exclusions used by `concat` when no flags are given.
    pub fn concat_defaults() -> Self {
        Self::default()
            .with_dirs(CONCAT_EXCLUDED_DIRS.iter().copied())
            .with_extensions(CONCAT_EXCLUDED_EXTENSIONS.iter().copied())
            .with_files(CONCAT_EXCLUDED_FILES.iter().copied())
    }

    /// Exclusions used by `tree` when no flags are given.
    pub fn tree_defaults() -> Self {
        Self::default()
            .with_dirs(TREE_EXCLUDED_DIRS.iter().copied())
            .with_files(TREE_EXCLUDED_FILES.iter().copied())
    }

    pub fn with_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_unique(&mut self.dirs, names.into_iter().map(|n| n.as_ref().trim().to_string()));
        self
    }

    /// Add extensions; a missing leading dot is added (`md` becomes `.md`).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = extensions.into_iter().map(|ext| {
            let ext = ext.as_ref().trim();
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            }
        });
        extend_unique(&mut self.extensions, normalized);
        self
    }

    pub fn with_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_unique(&mut self.files, names.into_iter().map(|n| n.as_ref().trim().to_string()));
        self
    }

    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.iter().any(|d| d == name)
    }

    /// A file is excluded by exact name or by its extension.
    pub fn excludes_file(&self, name: &str) -> bool {
        if self.files.iter().any(|f| f == name) {
            return true;
        }
        match extension_of(name) {
            Some(ext) => self.extensions.iter().any(|e| *e == ext),
            None => false,
        }
    }

    /// Comma-separated list of excluded directories, then excluded files.
    pub fn describe(&self) -> String {
        self.dirs.iter().chain(self.files.iter()).map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

fn extend_unique(target: &mut Vec<String>, items: impl Iterator<Item = String>) {
    for item in items {
        if !item.is_empty() && !target.contains(&item) {
            target.push(item);
        }
    }
}

/// Extension of a file name including the leading dot.
///
/// A leading dot alone does not start an extension, so `.env` has none
/// while `archive.tar.gz` has `.gz`.
pub fn extension_of(name: &str) -> Option<String> {
    Path::new(name).extension().map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Why a single file could not be included in the concatenated output.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("not valid UTF-8 text ({0})")]
    NotText(#[from] std::string::FromUtf8Error),
}

/// A file left out of the concatenated output because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConcatStats {
    pub files_written: usize,
    pub files_excluded: usize,
    pub files_unreadable: usize,
    pub dirs_pruned: usize,
    pub dirs_unreadable: usize,
    /// Non-directory entries the walk could not stat.
    pub entries_unreadable: usize,
    pub bytes_written: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub dirs_listed: usize,
    pub files_listed: usize,
    pub entries_excluded: usize,
    pub dirs_unreadable: usize,
}

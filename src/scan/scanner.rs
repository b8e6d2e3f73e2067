//! File scanner for the concatenator
//!
//! Walks the root depth-first with `walkdir`, pruning excluded directories
//! before descent and dropping excluded files before anything opens them.

use crate::domain::{ConcatStats, Exclusions};
use crate::utils::{display_relative, is_same_file};
use anyhow::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file that passed every exclusion check and is ready to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Root-relative display form, e.g. `./src/main.rs`.
    pub display_path: String,
}

/// Discovers the files the concatenator should include.
pub struct FileScanner {
    root_path: PathBuf,
    exclusions: Exclusions,
    skip_path: Option<PathBuf>,
    stats: ConcatStats,
}

impl FileScanner {
    /// Create a scanner with the default `concat` exclusions.
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            exclusions: Exclusions::concat_defaults(),
            skip_path: None,
            stats: ConcatStats::default(),
        }
    }

    pub fn exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Never yield this file (an absolute, resolved path). Used for the
    /// output artifact so a run does not read what it is writing.
    pub fn skip_path(mut self, path: PathBuf) -> Self {
        self.skip_path = Some(path);
        self
    }

    /// Walk the tree and hand every included file to `visit`, in order.
    ///
    /// Within a directory, files come before subdirectories and each group is
    /// sorted by name. Unlistable directories and entries whose metadata cannot
    /// be read are logged and skipped; only an error returned by `visit` stops
    /// the walk.
    pub fn scan<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(ScannedFile) -> Result<()>,
    {
        let exclusions = &self.exclusions;
        let mut stats = ConcatStats::default();
        let mut pruned = 0usize;

        let walker = WalkDir::new(&self.root_path)
            .follow_links(false)
            .sort_by(files_before_dirs)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if exclusions.excludes_dir(&name) {
                    debug!(path = %entry.path().display(), "Pruning excluded directory");
                    pruned += 1;
                    return false;
                }
                true
            });

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| self.display(p)).unwrap_or_default();
                    warn!("Skipped {}: {}", path, err);
                    if err.path().is_some_and(Path::is_dir) {
                        stats.dirs_unreadable += 1;
                    } else {
                        stats.entries_unreadable += 1;
                    }
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Symlinked directories are neither descended nor read
            if entry.path_is_symlink() && entry.path().is_dir() {
                debug!(path = %entry.path().display(), "Skipping symlinked directory");
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if exclusions.excludes_file(&name) {
                debug!(path = %entry.path().display(), "Skipping excluded file");
                stats.files_excluded += 1;
                continue;
            }

            if let Some(skip) = &self.skip_path {
                if is_same_file(entry.path(), skip) {
                    debug!(path = %entry.path().display(), "Skipping output file");
                    continue;
                }
            }

            visit(ScannedFile {
                path: entry.path().to_path_buf(),
                display_path: self.display(entry.path()),
            })?;
        }

        stats.dirs_pruned = pruned;
        self.stats = stats;
        Ok(())
    }

    /// Counters for the most recent walk (pruning, exclusions, listing errors).
    pub fn stats(&self) -> &ConcatStats {
        &self.stats
    }

    fn display(&self, path: &Path) -> String {
        display_relative(path.strip_prefix(&self.root_path).unwrap_or(path))
    }
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect(scanner: &mut FileScanner) -> Vec<String> {
        let mut seen = Vec::new();
        scanner
            .scan(|file| {
                seen.push(file.display_path);
                Ok(())
            })
            .unwrap();
        seen
    }

    #[test]
    fn test_scanner_orders_files_before_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/inner.rs"), "fn a() {}").unwrap();
        fs::write(root.join("z.txt"), "z").unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();

        let mut scanner = FileScanner::new(root.to_path_buf());
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./b.txt", "./z.txt", "./a/inner.rs"]);
    }

    #[test]
    fn test_excluded_dirs_are_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        for noise_dir in &[".git", "node_modules", ".next", "public"] {
            fs::create_dir_all(root.join(noise_dir).join("deep")).unwrap();
            fs::write(root.join(noise_dir).join("deep/file.js"), "// noise").unwrap();
        }
        fs::write(root.join("main.py"), "print('hello')").unwrap();

        let mut scanner = FileScanner::new(root.to_path_buf());
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./main.py"]);
        assert_eq!(scanner.stats().dirs_pruned, 4);
    }

    #[test]
    fn test_excluded_names_and_extensions_are_counted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("b.py"), "x = 1").unwrap();
        fs::write(root.join("c.md"), "# doc").unwrap();
        fs::write(root.join(".env"), "SECRET=1").unwrap();
        fs::write(root.join("package-lock.json"), "{}").unwrap();

        let mut scanner = FileScanner::new(root.to_path_buf());
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./b.py"]);
        assert_eq!(scanner.stats().files_excluded, 3);
    }

    #[test]
    fn test_nested_dir_with_excluded_name_is_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("web/public")).unwrap();
        fs::write(root.join("web/public/logo.svg"), "<svg/>").unwrap();
        fs::write(root.join("web/index.ts"), "export {}").unwrap();

        let mut scanner = FileScanner::new(root.to_path_buf());
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./web/index.ts"]);
    }

    #[test]
    fn test_custom_exclusions_replace_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("notes.md"), "# notes").unwrap();
        fs::write(root.join("data.csv"), "a,b").unwrap();

        let mut scanner = FileScanner::new(root.to_path_buf())
            .exclusions(Exclusions::default().with_extensions(["csv"]));
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./notes.md"]);
    }

    #[test]
    fn test_skip_path_is_never_yielded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("out.txt"), "previous run").unwrap();
        fs::write(root.join("src.rs"), "fn main() {}").unwrap();

        let skip = root.join("out.txt").canonicalize().unwrap();
        let mut scanner = FileScanner::new(root.to_path_buf()).skip_path(skip);
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./src.rs"]);
    }

    #[test]
    fn test_visit_error_stops_the_walk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();

        let mut calls = 0;
        let result = FileScanner::new(root.to_path_buf()).scan(|_| {
            calls += 1;
            anyhow::bail!("disk full")
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_in_file_name_is_kept_in_display_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src").join("a\\b.txt"), "x").unwrap();

        let mut scanner = FileScanner::new(root.to_path_buf());
        let paths = collect(&mut scanner);

        assert_eq!(paths, vec!["./src/a\\b.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_counted_and_walk_continues() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let locked = root.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "secret").unwrap();
        fs::create_dir_all(root.join("open")).unwrap();
        fs::write(root.join("open/visible.txt"), "v").unwrap();
        fs::write(root.join("top.txt"), "t").unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // Permission bits are not enforced (running as root)
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut scanner = FileScanner::new(root.to_path_buf());
        let paths = collect(&mut scanner);
        let stats = scanner.stats().clone();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(paths, vec!["./top.txt", "./open/visible.txt"]);
        assert_eq!(stats.dirs_unreadable, 1);
        assert_eq!(stats.entries_unreadable, 0);
    }
}

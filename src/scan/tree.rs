//! Directory tree generation.

use crate::domain::{Exclusions, TreeStats};
use crate::utils::is_same_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Render the tree under `root_path` as a header followed by one line per entry.
///
/// `skip_path` names a resolved file that must not appear in the listing
/// (the output artifact). Directories that cannot be listed contribute their
/// own line but no children.
pub fn generate_tree(
    root_path: &Path,
    exclusions: &Exclusions,
    skip_path: Option<&Path>,
) -> (String, TreeStats) {
    let mut walk = TreeWalk {
        exclusions,
        skip_path,
        lines: vec![header(exclusions)],
        stats: TreeStats::default(),
    };
    walk.walk(root_path, "");
    (walk.lines.join("\n"), walk.stats)
}

fn header(exclusions: &Exclusions) -> String {
    let described = exclusions.describe();
    if described.is_empty() {
        "Project Tree:\n".to_string()
    } else {
        format!("Project Tree (excluding {}):\n", described)
    }
}

struct TreeWalk<'a> {
    exclusions: &'a Exclusions,
    skip_path: Option<&'a Path>,
    lines: Vec<String>,
    stats: TreeStats,
}

impl TreeWalk<'_> {
    fn walk(&mut self, current_path: &Path, prefix: &str) {
        let read_dir = match fs::read_dir(current_path) {
            Ok(rd) => rd,
            Err(err) => {
                debug!(
                    path = %current_path.display(),
                    error = %err,
                    "Omitting unreadable directory"
                );
                self.stats.dirs_unreadable += 1;
                return;
            }
        };

        let mut entries: Vec<TreeEntry> = read_dir
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let file_type = entry.file_type().ok()?;
                let path = entry.path();
                // A symlink to a directory is a directory for exclusion, but is not descended
                let is_dir = file_type.is_dir() || (file_type.is_symlink() && path.is_dir());
                Some(TreeEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    path,
                    is_dir,
                    descend: file_type.is_dir(),
                })
            })
            .filter(|entry| {
                let excluded = if entry.is_dir {
                    self.exclusions.excludes_dir(&entry.name)
                } else {
                    self.exclusions.excludes_file(&entry.name)
                };
                if excluded {
                    self.stats.entries_excluded += 1;
                    return false;
                }
                !self.skip_path.is_some_and(|skip| !entry.is_dir && is_same_file(&entry.path, skip))
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let total_entries = entries.len();
        for (idx, entry) in entries.into_iter().enumerate() {
            let is_last = idx == total_entries - 1;
            let connector = if is_last { "└── " } else { "├── " };
            self.lines.push(format!("{}{}{}", prefix, connector, entry.name));

            if entry.is_dir {
                self.stats.dirs_listed += 1;
            } else {
                self.stats.files_listed += 1;
            }
            if entry.descend {
                let extension = if is_last { "    " } else { "│   " };
                self.walk(&entry.path, &format!("{}{}", prefix, extension));
            }
        }
    }
}

struct TreeEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    descend: bool,
}

//! Path display and output-file resolution

use std::path::{Path, PathBuf};

/// Render a root-relative path the way headers show it: `./src/main.rs`.
///
/// Components are joined with `/`; characters inside a component are kept
/// as they are, so a Unix file named `a\\b.txt` stays `./a\\b.txt`.
pub fn display_relative(rel: &Path) -> String {
    let mut out = String::from(".");
    for component in rel.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}

/// Absolute location of an output file, whether or not it exists yet.
///
/// Used to recognise the output artifact while walking so a run never reads
/// or lists its own output.
pub fn resolve_output(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Whether `candidate` resolves to `target` (an already resolved path).
pub fn is_same_file(candidate: &Path, target: &Path) -> bool {
    if candidate.file_name() != target.file_name() {
        return false;
    }
    candidate.canonicalize().map(|c| c == target).unwrap_or(false)
}

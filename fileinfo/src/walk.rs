//! File enumeration
//!
//! Expands user-supplied roots into a deduplicated, deterministically
//! ordered list of regular files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of expanding a set of roots
pub struct FileSet {
    /// Regular files, deduplicated and sorted by path string
    pub files: Vec<PathBuf>,
    /// Roots that exist neither as files nor directories; the caller
    /// reports these and keeps going
    pub missing: Vec<PathBuf>,
}

/// Expand `roots` into every regular file they reach.
///
/// A root that is a regular file is taken as-is; a directory root is
/// walked recursively. Deduplication keys on the canonicalized path, so
/// overlapping roots collapse to one occurrence per file.
pub fn collect_files(roots: &[PathBuf]) -> FileSet {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    let mut missing = Vec::new();

    for root in roots {
        if root.is_file() {
            add_file(root, &mut seen, &mut files);
        } else if root.is_dir() {
            walk_dir(root, &mut seen, &mut files);
        } else {
            debug!(path = %root.display(), "root does not exist");
            missing.push(root.clone());
        }
    }

    files.sort_by_key(|path| path.to_string_lossy().into_owned());
    FileSet { files, missing }
}

fn add_file(path: &Path, seen: &mut HashSet<PathBuf>, files: &mut Vec<PathBuf>) {
    let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if seen.insert(key) {
        files.push(path.to_path_buf());
    }
}

fn walk_dir(dir: &Path, seen: &mut HashSet<PathBuf>, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            add_file(&path, seen, files);
        } else if path.is_dir() {
            walk_dir(&path, seen, files);
        }
    }
}

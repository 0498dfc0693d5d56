//! Per-file dispatch
//!
//! Runs every handler whose pattern set matches a file's name, in
//! registration order, and collects the output. One failing handler never
//! blocks other handlers or other files.

use fileinfo_plugin::HandlerRegistry;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output collected for one file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

/// Run every matching handler over `path`.
///
/// Patterns are tested against the path's final name component. A handler
/// matched by several of its patterns still runs exactly once. Handler
/// failures are logged at debug level and contribute nothing.
pub fn process_file(path: &Path, registry: &HandlerRegistry) -> FileReport {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    debug!(path = %path.display(), "processing file");
    let mut lines = Vec::new();
    for entry in registry.entries() {
        if !entry.matches(&file_name) {
            continue;
        }

        let name = entry.meta().name;
        debug!(handler = name, "calling handler");
        match entry.handler().inspect(path) {
            Ok(output) => lines.extend(output),
            Err(err) => {
                debug!(handler = name, path = %path.display(), error = %err, "handler failed");
            }
        }
    }
    debug!(path = %path.display(), "finished file");

    FileReport {
        path: path.to_path_buf(),
        lines,
    }
}

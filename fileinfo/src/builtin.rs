//! Built-in default handler
//!
//! Registered first by discovery under a match-everything pattern, so
//! every file gets a banner: resolved path, type label, size in bytes.

use fileinfo_plugin::prelude::*;
use std::fs;
use std::path::Path;

/// Pattern the default handler registers under; matches every file name.
pub(crate) const MATCH_ALL: &str = ".*";

pub struct DefaultHandler;

/// Human-readable label from the file suffix, or a generic label
fn type_label(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{} file", ext.to_uppercase()),
        None => "File".to_string(),
    }
}

impl FileHandler for DefaultHandler {
    fn meta(&self) -> HandlerMeta {
        HandlerMeta {
            name: "default",
            description: "Path, type and size for any file",
        }
    }

    fn inspect(&self, path: &Path) -> Result<Vec<String>, HandlerError> {
        let resolved = path
            .canonicalize()
            .map_err(|source| HandlerError::io(path, source))?;
        let metadata = fs::metadata(path).map_err(|source| HandlerError::io(path, source))?;

        Ok(vec![
            resolved.display().to_string(),
            type_label(path),
            format!("{} bytes", metadata.len()),
        ])
    }
}

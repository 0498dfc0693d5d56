//! Handler trait and metadata

use crate::HandlerError;
use serde::Serialize;
use std::path::Path;

/// Metadata for a file handler
///
/// `name` is the handler's identity: registering under the same name again
/// accumulates patterns on the existing entry instead of adding a new one.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerMeta {
    pub name: &'static str,
    pub description: &'static str,
}

/// A unit of behavior that inspects one file and reports on it
///
/// Handlers are stateless pure functions of a single file path. They must
/// never panic; anything that can go wrong while reading or parsing the
/// file comes back as a [`HandlerError`], which the dispatcher logs and
/// discards so other handlers still run.
pub trait FileHandler: Send + Sync {
    fn meta(&self) -> HandlerMeta;

    /// Inspect `path` and return a finite sequence of printable lines.
    fn inspect(&self, path: &Path) -> Result<Vec<String>, HandlerError>;
}

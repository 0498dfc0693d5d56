//! Error types for the plugin system
//!
//! An optional plugin must never crash the host. The only failure surfaced
//! eagerly is a malformed pattern, reported at registration time; handler
//! failures are values the dispatcher logs and discards.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or registering a plugin
#[derive(Debug, Error)]
pub enum PluginError {
    /// The pattern failed to compile. Fail fast at registration time,
    /// not at dispatch time.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The plugin could not finish registering its handlers.
    #[error("plugin failed to load: {0}")]
    LoadFailed(String),
}

/// Errors raised by a handler while inspecting a file
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Failed(String),
}

impl HandlerError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn failed(details: impl Into<String>) -> Self {
        Self::Failed(details.into())
    }
}

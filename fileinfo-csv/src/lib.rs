//! Fileinfo CSV Plugin
//!
//! Handler for comma-separated files, registered under the `\.csv`
//! pattern. Reports row count and the widest row's column count. A file
//! that fails to parse reports zero rows and columns rather than
//! propagating the error.

mod shape;

pub use shape::CsvShape;

use fileinfo_plugin::{HandlerRegistry, PluginError};
use std::sync::Arc;

/// Register the CSV handler into `registry`
pub fn register_handlers(mut registry: HandlerRegistry) -> Result<HandlerRegistry, PluginError> {
    registry.register(r"\.csv", Arc::new(CsvShape))?;
    Ok(registry)
}

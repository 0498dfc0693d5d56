//! Fileinfo Text Plugin
//!
//! Handlers for plain-text files: line and word counts. Both register
//! under the `\.txt` pattern.

mod count;

pub use count::{LineCount, WordCount};

use fileinfo_plugin::{HandlerRegistry, PluginError};
use std::sync::Arc;

/// Register text handlers into `registry`
pub fn register_handlers(mut registry: HandlerRegistry) -> Result<HandlerRegistry, PluginError> {
    registry.register(r"\.txt", Arc::new(LineCount))?;
    registry.register(r"\.txt", Arc::new(WordCount))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_handlers() {
        let registry = HandlerRegistry::new();
        let registry = register_handlers(registry).unwrap();

        assert!(registry.get("line_count").is_some());
        assert!(registry.get("word_count").is_some());
        assert!(registry.get("line_count").unwrap().matches("report.txt"));
        assert!(!registry.get("line_count").unwrap().matches("data.csv"));
    }
}

//! Handler Registry

use crate::{FileHandler, HandlerMeta, PluginError};
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// One registered handler together with its accumulated pattern set
///
/// Invariant: the pattern set is non-empty; an entry only exists because at
/// least one registration succeeded.
pub struct HandlerEntry {
    handler: Arc<dyn FileHandler>,
    patterns: Vec<Regex>,
}

impl HandlerEntry {
    pub fn meta(&self) -> HandlerMeta {
        self.handler.meta()
    }

    pub fn handler(&self) -> &dyn FileHandler {
        self.handler.as_ref()
    }

    /// Source text of every registered pattern, in registration order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.as_str())
    }

    /// Whether any pattern matches `file_name`.
    ///
    /// Unanchored search: `.*` matches everything, `\.txt` matches any
    /// name containing that substring.
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(file_name))
    }
}

/// Central handler registry
///
/// Entries keep registration order so the built-in default handler, which
/// discovery registers first, is always tried first. The registry is
/// mutated only during discovery and read-only during dispatch.
pub struct HandlerRegistry {
    entries: Vec<HandlerEntry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `handler` under `pattern`.
    ///
    /// Registering the same handler (by `meta().name`) again accumulates
    /// patterns on the existing entry rather than overwriting it. A
    /// pattern that does not compile is rejected here, before dispatch
    /// ever sees it.
    pub fn register(
        &mut self,
        pattern: &str,
        handler: Arc<dyn FileHandler>,
    ) -> Result<(), PluginError> {
        let compiled = Regex::new(pattern).map_err(|source| PluginError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let name = handler.meta().name;
        debug!(handler = name, pattern, "registering handler");
        match self.position(name) {
            Some(idx) => self.entries[idx].patterns.push(compiled),
            None => self.entries.push(HandlerEntry {
                handler,
                patterns: vec![compiled],
            }),
        }
        Ok(())
    }

    /// Append another registry's entries, preserving their order.
    ///
    /// Handlers already present (by name) have the incoming patterns added
    /// to their set. Discovery uses this to fold each plugin's private
    /// registry into the result, so a plugin that fails mid-registration
    /// contributes nothing at all.
    pub fn merge(&mut self, other: HandlerRegistry) {
        for entry in other.entries {
            match self.position(entry.handler.meta().name) {
                Some(idx) => self.entries[idx].patterns.extend(entry.patterns),
                None => self.entries.push(entry),
            }
        }
    }

    /// Entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &HandlerEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&HandlerEntry> {
        self.entries.iter().find(|e| e.handler.meta().name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.handler.meta().name == name)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandlerError;
    use std::path::Path;

    struct Probe(&'static str);

    impl FileHandler for Probe {
        fn meta(&self) -> HandlerMeta {
            HandlerMeta {
                name: self.0,
                description: "test probe",
            }
        }

        fn inspect(&self, _path: &Path) -> Result<Vec<String>, HandlerError> {
            Ok(vec![self.0.to_string()])
        }
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = HandlerRegistry::new();
        registry.register(".*", Arc::new(Probe("first"))).unwrap();
        registry
            .register(r"\.txt", Arc::new(Probe("second")))
            .unwrap();

        let names: Vec<_> = registry.entries().map(|e| e.meta().name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_register_accumulates_patterns_for_same_handler() {
        let mut registry = HandlerRegistry::new();
        registry
            .register(r"\.txt", Arc::new(Probe("probe")))
            .unwrap();
        registry
            .register(r"\.text", Arc::new(Probe("probe")))
            .unwrap();

        assert_eq!(registry.len(), 1);
        let entry = registry.get("probe").unwrap();
        let patterns: Vec<_> = entry.patterns().collect();
        assert_eq!(patterns, vec![r"\.txt", r"\.text"]);
        assert!(entry.matches("notes.txt"));
        assert!(entry.matches("notes.text"));
        assert!(!entry.matches("notes.csv"));
    }

    #[test]
    fn test_register_rejects_bad_pattern() {
        let mut registry = HandlerRegistry::new();
        let err = registry
            .register("[unclosed", Arc::new(Probe("probe")))
            .unwrap_err();
        assert!(matches!(err, PluginError::InvalidPattern { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_matches_is_unanchored_search() {
        let mut registry = HandlerRegistry::new();
        registry
            .register(r"\.txt", Arc::new(Probe("probe")))
            .unwrap();

        let entry = registry.get("probe").unwrap();
        assert!(entry.matches("report.txt"));
        // Substring search, not a full-string anchor
        assert!(entry.matches("archive.txt.bak"));
    }

    #[test]
    fn test_merge_appends_and_accumulates() {
        let mut base = HandlerRegistry::new();
        base.register(".*", Arc::new(Probe("default"))).unwrap();
        base.register(r"\.txt", Arc::new(Probe("shared"))).unwrap();

        let mut incoming = HandlerRegistry::new();
        incoming
            .register(r"\.md", Arc::new(Probe("shared")))
            .unwrap();
        incoming
            .register(r"\.csv", Arc::new(Probe("csv")))
            .unwrap();

        base.merge(incoming);

        let names: Vec<_> = base.entries().map(|e| e.meta().name).collect();
        assert_eq!(names, vec!["default", "shared", "csv"]);
        let shared = base.get("shared").unwrap();
        assert!(shared.matches("a.txt"));
        assert!(shared.matches("a.md"));
    }
}

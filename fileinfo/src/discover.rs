//! Plugin discovery
//!
//! Plugins are statically linked crates listed in an explicit
//! [`PluginManifest`]; each exposes one registration entry point. Entries
//! are still filtered by the `fileinfo…plugin` naming convention, and a
//! plugin that fails to load contributes nothing — discovery never aborts
//! because of one bad plugin.

use crate::builtin::{DefaultHandler, MATCH_ALL};
use fileinfo_plugin::{HandlerRegistry, PluginLoader};
use std::sync::Arc;
use tracing::debug;

const PLUGIN_PREFIX: &str = "fileinfo";
const PLUGIN_SUFFIX: &str = "plugin";

/// Ordered manifest of plugins eligible for discovery
pub struct PluginManifest {
    plugins: Vec<(&'static str, PluginLoader)>,
}

impl PluginManifest {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn with_plugin(mut self, name: &'static str, loader: PluginLoader) -> Self {
        self.plugins.push((name, loader));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.plugins.iter().map(|(name, _)| *name)
    }
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Manifest of the plugins shipped with this workspace
pub fn standard_manifest() -> PluginManifest {
    PluginManifest::new()
        .with_plugin("fileinfo_text_plugin", fileinfo_text::register_handlers)
        .with_plugin("fileinfo_csv_plugin", fileinfo_csv::register_handlers)
}

/// Collect handlers from every manifest plugin into one registry.
///
/// The built-in default handler registers first so it runs first for
/// every file. Each plugin loads into its own registry which is merged on
/// success, so a plugin failing mid-registration contributes no handlers
/// at all.
pub fn discover(manifest: &PluginManifest) -> HandlerRegistry {
    debug!("finding handler plugins");
    let mut registry = HandlerRegistry::new();
    if let Err(err) = registry.register(MATCH_ALL, Arc::new(DefaultHandler)) {
        debug!(error = %err, "built-in handler failed to register");
    }

    for &(name, loader) in &manifest.plugins {
        if !(name.starts_with(PLUGIN_PREFIX) && name.ends_with(PLUGIN_SUFFIX)) {
            debug!(plugin = name, "skipping: name outside plugin convention");
            continue;
        }
        match loader(HandlerRegistry::new()) {
            Ok(found) => {
                debug!(plugin = name, handlers = found.len(), "plugin loaded");
                registry.merge(found);
            }
            Err(err) => {
                debug!(plugin = name, error = %err, "skipping plugin due to load error");
            }
        }
    }

    debug!(handlers = registry.len(), "found handler plugins");
    registry
}

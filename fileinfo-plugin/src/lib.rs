//! Fileinfo Plugin System
//!
//! Provides the contract between the fileinfo host and its plugins:
//! - Handlers (inspect one file, return printable lines)
//! - Registry (patterns → handlers, consulted during dispatch)
//!
//! A plugin crate exposes a single registration entry point with the
//! [`PluginLoader`] signature; the host collects those through its
//! manifest and never needs to know anything else about the plugin.

mod error;
mod registry;
mod traits;

pub use error::{HandlerError, PluginError};
pub use registry::{HandlerEntry, HandlerRegistry};
pub use traits::{FileHandler, HandlerMeta};

/// Registration entry point exposed by a plugin crate.
///
/// The loader receives a registry, registers its handlers into it, and
/// hands it back. Any error means the plugin as a whole contributes
/// nothing; the host logs and moves on.
pub type PluginLoader = fn(HandlerRegistry) -> Result<HandlerRegistry, PluginError>;

/// Re-exports for plugin authors
pub mod prelude {
    pub use crate::{
        FileHandler, HandlerEntry, HandlerError, HandlerMeta, HandlerRegistry, PluginError,
        PluginLoader,
    };
}

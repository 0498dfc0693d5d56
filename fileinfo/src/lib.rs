//! Fileinfo - plugin-driven file inspection
//!
//! Expands user-supplied paths into a file list, matches each file name
//! against the handlers collected from discovered plugins, and gathers
//! every matching handler's output into a per-file report.
//!
//! The pieces, in data-flow order:
//! - [`discover`]: fold each manifest plugin's handlers into one registry,
//!   built-in default handler first
//! - [`collect_files`]: expand roots into a deduplicated, sorted file list
//! - [`process_file`]: run every matching handler over one file
//! - [`Renderer`]: print the report

mod builtin;
mod discover;
mod dispatch;
mod render;
mod walk;

pub use builtin::DefaultHandler;
pub use discover::{discover, standard_manifest, PluginManifest};
pub use dispatch::{process_file, FileReport};
pub use render::Renderer;
pub use walk::{collect_files, FileSet};

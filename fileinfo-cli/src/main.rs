//! fileinfo command line interface
//!
//! Discovers plugin handlers, expands the given paths into a file list,
//! and prints each file's report. Exits 0 on normal completion even when
//! some files produce no handler output; a missing root is reported on
//! stderr without halting the other roots.

use clap::Parser;
use fileinfo::{collect_files, discover, process_file, standard_manifest, Renderer};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fileinfo")]
#[command(about = "Get information on files.", long_about = None)]
struct Cli {
    /// Paths to search
    #[arg(required = true)]
    path: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let registry = discover(&standard_manifest());

    let set = collect_files(&cli.path);
    for root in &set.missing {
        error!(path = %root.display(), "path does not exist");
    }

    let renderer = Renderer::new();
    let mut stdout = io::stdout().lock();
    for file in &set.files {
        let report = process_file(file, &registry);
        if renderer.write_to(&mut stdout, &report).is_err() {
            // Downstream closed the pipe; nothing left to print
            break;
        }
    }

    ExitCode::SUCCESS
}

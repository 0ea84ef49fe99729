//! # CLI Behavior
//!
//! This is **one possible UI client** for templink, not the application itself.
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Output
//!
//! Reports print as colored text by default, or as pretty JSON with `--json`.
//! The JSON is the serialized report type from `templinkapp`, unchanged.
//!
//! ## Logging
//!
//! Logs go to stderr through `tracing-subscriber`. `RUST_LOG` wins when set;
//! otherwise `-v` shows debug logs and the default shows warnings only, such
//! as records whose stored data could not be decoded.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Input reading, context wiring and dispatch
//! - `render`: Text output

mod commands;
mod render;
pub mod setup;

use anyhow::Result;
use clap::Parser;
use setup::Cli;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    commands::dispatch(&cli)
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

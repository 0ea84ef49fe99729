//! # Templink CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and maps the outcome to a process exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/templink/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - input reading + context wiring (commands.rs)             │
//! │  - text and JSON rendering (render.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  templinkapp (crates/templinkapp)                           │
//! │  - TemplinkApi facade, commands, store                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Status
//!
//! - `0`: the command ran (a preview reporting breakage is still a success)
//! - `1`: error, message on stderr; also invalid placeholder names in `names`
//! - `2`: `scan` found the system in `critical` state

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

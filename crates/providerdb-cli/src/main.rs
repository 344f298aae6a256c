//! # providerdb CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/providerdb-cli/src/cli/)                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  providerdb library (crates/providerdb/)                    │
//! │  - API facade → commands → store                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in the library is UI agnostic. The CLI layer owns argument parsing,
//! logging setup, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

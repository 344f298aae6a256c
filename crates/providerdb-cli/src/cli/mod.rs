//! # CLI Layer
//!
//! This module is **one possible client** for providerdb, not the application itself.
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption

mod commands;
mod render;
mod setup;

pub use commands::run;

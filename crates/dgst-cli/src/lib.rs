//! # dgst-cli — Command-Line Front End
//!
//! Thin I/O layer over [`dgst_core`]. Argument parsing lives in the binary;
//! this library holds the command handlers so they can be tested without
//! spawning a process.
//!
//! ## Commands
//!
//! - `dgst hash` — SHA-256 of the input (file or stdin).
//! - `dgst test` — run the built-in validation vectors.
//! - `dgst version` — version and license notice.
//! - `dgst help` — usage.
//!
//! Global options `--input`, `--output` and `--quiet` are collected into an
//! [`IoConfig`](io::IoConfig) that is passed to each handler. The legacy
//! slash syntax (`/S /I file /Q`) is still accepted, see [`legacy`].
//!
//! ## Crate Policy
//!
//! - Handlers return `anyhow::Result<u8>`; the `u8` is the process exit code.
//! - Logging goes to stderr through `tracing` so stdout carries only results.

pub mod hash;
pub mod io;
pub mod legacy;
pub mod selftest;
pub mod version;

/// Name the binary reports in version output.
pub const PROGRAM_NAME: &str = "dgst";

/// Package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

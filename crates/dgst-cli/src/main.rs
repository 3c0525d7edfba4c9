//! # dgst CLI entry point
//!
//! Parses command-line arguments and dispatches to the command handlers in
//! the `dgst_cli` library.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dgst_cli::hash::run_hash;
use dgst_cli::io::IoConfig;
use dgst_cli::legacy::normalize_args;
use dgst_cli::selftest::{run_test, TestArgs};
use dgst_cli::version::run_version;

/// Generate the SHA-256 hash of a file.
///
/// dgst is a simple implementation of the SHA-256 hashing algorithm.
#[derive(Parser, Debug)]
#[command(name = "dgst", version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    io: IoConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate SHA-256 hash.
    Hash,

    /// Run all validation tests.
    Test(TestArgs),

    /// Display version info.
    Version,
}

fn main() -> ExitCode {
    let normalized = normalize_args(std::env::args_os());
    let cli = Cli::parse_from(normalized.args);

    // RUST_LOG wins; otherwise map -v occurrences onto a level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = dgst_cli::VERSION, "dgst starting");
    for option in normalized.ignored {
        tracing::debug!(option, "legacy option without a value ignored");
    }

    let result = match &cli.command {
        Commands::Hash => run_hash(&cli.io),
        Commands::Test(args) => run_test(args, &cli.io),
        Commands::Version => run_version(&cli.io),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

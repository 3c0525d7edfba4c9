//! # Input/Output Selection
//!
//! [`IoConfig`] carries the stream selection and quiet flag that every
//! command handler receives. Nothing here is process-global: handlers open
//! their streams from the config they are given.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Stream selection shared by all commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct IoConfig {
    /// Input file (defaults to stdin).
    #[arg(short, long, value_name = "FILE", global = true)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout).
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Quiet mode: suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl IoConfig {
    /// Returns `true` when output goes to stdout rather than a file.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.is_none()
    }

    /// Open the configured input stream.
    pub fn open_input(&self) -> Result<Box<dyn Read>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open input file {}", path.display()))?;
                tracing::debug!(path = %path.display(), "reading input file");
                Ok(Box::new(file))
            }
            None => {
                tracing::debug!("reading stdin");
                Ok(Box::new(io::stdin().lock()))
            }
        }
    }

    /// Open the configured output stream, truncating an existing file.
    pub fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot open output file {}", path.display()))?;
                tracing::debug!(path = %path.display(), "writing output file");
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

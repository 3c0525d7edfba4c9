//! # Test Command
//!
//! Runs the engine's built-in validation vectors and reports the result in
//! the classic line-oriented format, or as JSON with `--json`. The exit
//! code is 0 only when every vector passes, regardless of quiet mode.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use dgst_core::{run_self_tests, SelfTestReport};

use crate::io::IoConfig;

/// Arguments for the `dgst test` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct TestArgs {
    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the test command.
pub fn run_test(args: &TestArgs, config: &IoConfig) -> Result<u8> {
    let report = run_self_tests();
    tracing::info!(
        passed = report.passed,
        total = report.total,
        "self-test finished"
    );
    for (index, outcome) in report.outcomes.iter().enumerate() {
        if !outcome.passed {
            tracing::warn!(
                vector = index + 1,
                computed = %outcome.computed,
                expected = outcome.expected,
                "validation vector mismatch"
            );
        }
    }

    if !config.quiet {
        let mut output = config.open_output()?;
        if args.json {
            write_json(&mut output, &report)?;
        } else {
            write_report(&mut output, &report)?;
        }
        output.flush().context("failed to flush output")?;
    }

    Ok(exit_code(&report))
}

fn exit_code(report: &SelfTestReport) -> u8 {
    if report.all_passed() {
        0
    } else {
        1
    }
}

/// Write the human-readable report.
pub fn write_report<W: Write + ?Sized>(out: &mut W, report: &SelfTestReport) -> Result<()> {
    writeln!(out, "\nSHA-256 Validation Tests: {}\n", report.total)?;
    for (index, outcome) in report.outcomes.iter().enumerate() {
        let verdict = if outcome.passed { "passed." } else { "failed!" };
        writeln!(out, " Test {} {verdict}", index + 1)?;
    }
    writeln!(
        out,
        "\nTest Results: {} of {} successful",
        report.passed, report.total
    )?;
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write + ?Sized>(out: &mut W, report: &SelfTestReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

//! Gradebook - student score manager
//!
//! Records three subject scores per student, derives total, average and
//! letter grade, keeps competition ranks current and reports statistics.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::failure::{clap_failure, requested_format};
use cli::{Cli, OutputFormat};
use gradebook_core::error::GradeError;
use gradebook_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return rejected_command_line(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Help and version print normally. Other failures become a JSON envelope
/// when argv asked for JSON, and clap's own message otherwise.
fn rejected_command_line(err: clap::Error) -> ExitCode {
    if !err.use_stderr() {
        err.exit();
    }
    match requested_format(env::args().skip(1)) {
        Some(OutputFormat::Json) => report(&clap_failure(&err), OutputFormat::Json, false),
        _ => err.exit(),
    }
}

fn report(err: &GradeError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

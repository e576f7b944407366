//! Command lines clap rejects
//!
//! A parse failure happens before `Cli.format` exists, so the requested
//! format is read straight from argv to decide whether the failure is
//! reported as a JSON envelope.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use gradebook_core::error::GradeError;
use gradebook_core::format::OutputFormat;

/// First `--format` value on a raw command line that names a known format
pub fn requested_format<I, S>(args: I) -> Option<OutputFormat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.as_ref().strip_prefix("--format") {
            Some("") => args.next().map(|v| v.as_ref().to_string()),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if let Some(format) = value.and_then(|v| v.parse::<OutputFormat>().ok()) {
            return Some(format);
        }
    }
    None
}

/// The gradebook error a clap failure stands for. Always a usage error.
pub fn clap_failure(err: &clap::Error) -> GradeError {
    let on_format = matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with("--format")
    );

    match err.kind() {
        ErrorKind::ArgumentConflict if on_format => GradeError::DuplicateFormat,
        _ => GradeError::UsageError(err.to_string()),
    }
}

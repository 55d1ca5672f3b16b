//! Strips the extension from a fixed file name and prints the result.
//!
//! Run with
//!
//! ```bash
//! cargo run -p extstrip --bin remove-ext
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=extstrip=trace` to see the match
//! offsets reported by the library.

#![forbid(unsafe_code)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use extstrip::{StripError, strip_suffix};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const INPUT: &str = "example.txt";
const EXTENSION: &str = ".txt";
const LITERAL: &str = "literal?";

#[derive(Debug, Error)]
enum DriverError {
    #[error(transparent)]
    Strip(#[from] StripError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(input: &str, extension: &str, out: &mut impl Write) -> Result<(), DriverError> {
    let stem = strip_suffix(input, extension)?;
    writeln!(out, "{stem}")?;
    writeln!(out, "{LITERAL}")?;
    Ok(())
}

/// Maps the outcome of [`run`] to a process status, writing a single
/// diagnostic line to `err_out` on failure.
fn report(result: Result<(), DriverError>, err_out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(?err, "remove-ext failed");
            // Nothing more can be done if stderr itself is gone.
            let _ = writeln!(err_out, "error: {err}");
            1
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let mut out = io::stdout().lock();
    let result = run(INPUT, EXTENSION, &mut out);
    ExitCode::from(report(result, &mut io::stderr().lock()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_stem_then_literal() {
        let mut out = Vec::new();
        run(INPUT, EXTENSION, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "example\nliteral?\n");
    }

    #[test]
    fn missing_extension_prints_nothing() {
        let mut out = Vec::new();
        let err = run("noext", EXTENSION, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(err.to_string(), "pattern \".txt\" not found in input");
    }

    #[test]
    fn failure_exits_with_one_diagnostic_line() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let status = report(run("noext", EXTENSION, &mut out), &mut err_out);
        assert_eq!(status, 1);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err_out).unwrap(),
            "error: pattern \".txt\" not found in input\n"
        );
    }

    #[test]
    fn success_exits_quietly() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let status = report(run(INPUT, EXTENSION, &mut out), &mut err_out);
        assert_eq!(status, 0);
        assert!(err_out.is_empty());
    }
}

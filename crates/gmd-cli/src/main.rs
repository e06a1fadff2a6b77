//! Entry point for the `gmd` binary.
//!
//! The binary delegates to [`gmd_cli::run`], which loads configuration,
//! installs telemetry and processes the configured source directory.

use std::io::{self, StderrLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    gmd_cli::run(std::env::args_os(), &mut stderr)
}

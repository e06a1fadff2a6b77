//! Error types and exit code mapping for the `gmd` binary.

use std::error::Error as StdError;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use gmd_runner::{ErrorKind, RunError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Exit code for configuration and telemetry failures (`EX_CONFIG`).
pub(crate) const CONFIG_EXIT_CODE: u8 = 78;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Run(#[from] RunError),
}

impl AppError {
    /// Process exit code reported for this error.
    pub(crate) const fn exit_code(&self) -> u8 {
        match self {
            Self::LoadConfiguration(_) | Self::Telemetry(_) => CONFIG_EXIT_CODE,
            Self::Run(error) => match error.kind() {
                ErrorKind::ProcessingFailed => 1,
                ErrorKind::Resolution => 2,
                ErrorKind::LaunchFailed => 3,
                ErrorKind::UnsupportedPlatform => 4,
                ErrorKind::InvalidSource => 5,
            },
        }
    }

    /// Writes the error and every underlying cause to `stderr`.
    pub(crate) fn report<E: Write>(&self, stderr: &mut E) -> ExitCode {
        let _ = writeln!(stderr, "error: {self}");
        let mut cause = self.source();
        while let Some(error) = cause {
            let _ = writeln!(stderr, "  caused by: {error}");
            cause = error.source();
        }
        ExitCode::from(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use gmd_runner::ResolutionError;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::unsupported(
        RunError::UnsupportedPlatform { os_name: "SunOS".into(), os_arch: "sparc".into() },
        4
    )]
    #[case::resolution(RunError::from(ResolutionError::SessionUnavailable), 2)]
    #[case::launch(
        RunError::LaunchFailed {
            program: PathBuf::from("/opt/jdk/bin/java"),
            message: "not found".into(),
            source: None,
        },
        3
    )]
    #[case::not_directory(RunError::SourceNotDirectory { path: PathBuf::from("README.gmd") }, 5)]
    fn run_errors_map_to_distinct_exit_codes(#[case] error: RunError, #[case] expected: u8) {
        assert_eq!(AppError::Run(error).exit_code(), expected);
    }

    #[test]
    fn telemetry_failures_use_config_exit_code() {
        let error = AppError::Telemetry(TelemetryError::Filter("bad".into()));
        assert_eq!(error.exit_code(), CONFIG_EXIT_CODE);
    }

    #[test]
    fn report_lists_underlying_causes() {
        let error = AppError::Run(RunError::from(ResolutionError::SessionUnavailable));
        let mut stderr = Vec::new();
        let _ = error.report(&mut stderr);

        let text = String::from_utf8(stderr).expect("utf8");
        assert!(text.starts_with("error: failed to resolve dependencies"), "{text}");
        assert!(
            text.contains("caused by: no resolution session is available"),
            "{text}"
        );
    }
}

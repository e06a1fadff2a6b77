//! Unit tests for runner error types.

use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::processor::ProcessorError;

#[test]
fn unsupported_platform_message_names_the_os() {
    let error = RunError::UnsupportedPlatform {
        os_name: "plan9".into(),
        os_arch: "mips".into(),
    };
    let message = error.to_string();
    assert!(message.contains("plan9"), "expected OS in message: {message}");
    assert_eq!(error.kind(), ErrorKind::UnsupportedPlatform);
}

#[test]
fn non_zero_exit_message_includes_status() {
    let error = RunError::processing("src/main/gmd", ProcessingFailure::ExitStatus(7));
    let message = error.to_string();
    assert!(message.contains("src/main/gmd"), "expected path: {message}");
    assert!(message.contains('7'), "expected status: {message}");
    assert_eq!(error.kind(), ErrorKind::ProcessingFailed);
}

#[test]
fn processor_error_is_a_processing_failure() {
    let cause = ProcessingFailure::from(ProcessorError::new("template exploded"));
    let error = RunError::processing("docs", cause);
    assert_eq!(error.kind(), ErrorKind::ProcessingFailed);
    assert!(error.to_string().contains("template exploded"));
}

#[test]
fn resolution_errors_keep_their_own_kind() {
    let error = RunError::from(ResolutionError::SessionUnavailable);
    assert_eq!(error.kind(), ErrorKind::Resolution);
    assert!(error.to_string().starts_with("failed to resolve dependencies"));
}

#[rstest]
#[case::not_directory(
    RunError::SourceNotDirectory { path: PathBuf::from("README.gmd") },
    "README.gmd"
)]
#[case::io(
    RunError::Io {
        path: PathBuf::from("locked"),
        source: Arc::new(std::io::Error::other("permission denied")),
    },
    "permission denied"
)]
fn source_errors_are_invalid_source(#[case] error: RunError, #[case] expected: &str) {
    assert_eq!(error.kind(), ErrorKind::InvalidSource);
    let message = error.to_string();
    assert!(message.contains(expected), "expected {expected}: {message}");
}

#[test]
fn launch_failure_is_distinct_from_processing_failure() {
    let error = RunError::LaunchFailed {
        program: PathBuf::from("/opt/jdk/bin/java"),
        message: "No such file or directory".into(),
        source: None,
    };
    assert_eq!(error.kind(), ErrorKind::LaunchFailed);
    assert!(error.to_string().contains("/opt/jdk/bin/java"));
}

#[test]
fn run_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RunError>();
}

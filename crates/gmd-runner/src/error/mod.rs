//! Domain errors raised while running the gmd processor.
//!
//! All errors use `thiserror`-derived enums with structured context so callers
//! can inspect the failure programmatically. I/O errors are wrapped in `Arc`
//! to satisfy the `result_large_err` Clippy lint.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::processor::ProcessorError;
use crate::resolver::ResolutionError;

/// Coarse classification of a [`RunError`].
///
/// Operators use the kind to tell "could not find dependencies" apart from
/// "dependencies found but processing failed"; the CLI maps each kind to a
/// distinct exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The host OS is not one the toolkit ships native artifacts for.
    UnsupportedPlatform,
    /// The requirement set could not be resolved.
    Resolution,
    /// The processor child process could not be started.
    LaunchFailed,
    /// The processor ran and reported failure.
    ProcessingFailed,
    /// The source location is unusable.
    InvalidSource,
}

/// Why the processor run failed.
#[derive(Debug, Error)]
pub enum ProcessingFailure {
    /// The child process exited with a non-zero status code.
    #[error("processor exited with code {0}")]
    ExitStatus(i32),

    /// The child process was terminated without an exit code.
    #[error("processor was terminated before reporting an exit code")]
    Terminated,

    /// The in-process processor raised an error.
    #[error(transparent)]
    Processor(#[from] ProcessorError),
}

/// Errors arising from a gmd processing invocation.
#[derive(Debug, Error)]
pub enum RunError {
    /// No platform tag matches the host operating system.
    #[error("unsupported operating system '{os_name}' ({os_arch})")]
    UnsupportedPlatform {
        /// Operating system name that was classified.
        os_name: String,
        /// Architecture reported alongside the OS name.
        os_arch: String,
    },

    /// The resolution capability failed to resolve the requirement set.
    #[error("failed to resolve dependencies: {source}")]
    Resolution {
        /// Underlying resolver failure.
        #[source]
        source: ResolutionError,
    },

    /// The processor child process could not be started.
    #[error("failed to launch '{program}': {message}")]
    LaunchFailed {
        /// Program that was to be executed.
        program: PathBuf,
        /// Human-readable failure description.
        message: String,
        /// Optional underlying I/O error.
        #[source]
        source: Option<Arc<std::io::Error>>,
    },

    /// The processor ran but did not succeed.
    #[error("failed to process gmd files in {}: {cause}", source_dir.display())]
    ProcessingFailed {
        /// Source directory handed to the processor.
        source_dir: PathBuf,
        /// What went wrong.
        #[source]
        cause: ProcessingFailure,
    },

    /// The configured source path exists but is not a directory.
    #[error("{} is a file, not a directory", path.display())]
    SourceNotDirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// Inspecting a path failed.
    #[error("I/O error while inspecting {}: {source}", path.display())]
    Io {
        /// Path being inspected.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl RunError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedPlatform { .. } => ErrorKind::UnsupportedPlatform,
            Self::Resolution { .. } => ErrorKind::Resolution,
            Self::LaunchFailed { .. } => ErrorKind::LaunchFailed,
            Self::ProcessingFailed { .. } => ErrorKind::ProcessingFailed,
            Self::SourceNotDirectory { .. } | Self::Io { .. } => ErrorKind::InvalidSource,
        }
    }

    pub(crate) fn processing(source_dir: impl Into<PathBuf>, cause: ProcessingFailure) -> Self {
        Self::ProcessingFailed {
            source_dir: source_dir.into(),
            cause,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

impl From<ResolutionError> for RunError {
    fn from(source: ResolutionError) -> Self {
        Self::Resolution { source }
    }
}

#[cfg(test)]
mod tests;

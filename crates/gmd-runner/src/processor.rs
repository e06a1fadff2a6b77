//! In-process invocation of the gmd processor.
//!
//! The fallback path calls a [`Processor`] directly with the job's paths as
//! configured. The bundled [`AmbientProcessor`] runs the entry point under
//! the located runtime with whatever class path the current process already
//! carries in its environment; it never adds resolved artifacts.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use gmd_config::OutputType;
use thiserror::Error;
use tracing::debug;

use crate::launcher::RuntimeImage;

/// Tracing target for fallback processing.
const PROCESSOR_TARGET: &str = "gmd_runner::processor";

/// Failure raised by a [`Processor`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProcessorError {
    message: String,
    #[source]
    source: Option<Arc<std::io::Error>>,
}

impl ProcessorError {
    /// Creates an error from a description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping an I/O failure.
    #[must_use]
    pub fn with_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The processor's in-process entry capability.
pub trait Processor {
    /// Processes every gmd file in `source_dir` into `target_dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessorError`] when processing fails for any reason.
    fn process(
        &self,
        source_dir: &Path,
        target_dir: &Path,
        output_type: OutputType,
    ) -> Result<(), ProcessorError>;
}

impl<T: Processor + ?Sized> Processor for &T {
    fn process(
        &self,
        source_dir: &Path,
        target_dir: &Path,
        output_type: OutputType,
    ) -> Result<(), ProcessorError> {
        (**self).process(source_dir, target_dir, output_type)
    }
}

/// Bundled processor relying on the runtime and class path already present.
#[derive(Debug, Clone)]
pub struct AmbientProcessor {
    runtime: Option<RuntimeImage>,
    entry_point: String,
}

impl AmbientProcessor {
    /// Creates a processor for `entry_point`.
    ///
    /// `runtime` is `None` when no runtime could be located; processing then
    /// fails when attempted rather than at construction.
    #[must_use]
    pub fn new(runtime: Option<RuntimeImage>, entry_point: impl Into<String>) -> Self {
        Self {
            runtime,
            entry_point: entry_point.into(),
        }
    }

    fn executable(&self) -> Result<&PathBuf, ProcessorError> {
        self.runtime
            .as_ref()
            .map(RuntimeImage::executable)
            .ok_or_else(|| ProcessorError::new("no runtime is available for bundled processing"))
    }
}

impl Processor for AmbientProcessor {
    fn process(
        &self,
        source_dir: &Path,
        target_dir: &Path,
        output_type: OutputType,
    ) -> Result<(), ProcessorError> {
        let executable = self.executable()?;
        debug!(
            target: PROCESSOR_TARGET,
            executable = %executable.display(),
            entry_point = %self.entry_point,
            "running bundled processor"
        );

        let status = Command::new(executable)
            .arg(&self.entry_point)
            .arg(source_dir)
            .arg(target_dir)
            .arg(output_type.as_str())
            .status()
            .map_err(|err| {
                ProcessorError::with_io(
                    format!("failed to run {}", executable.display()),
                    err,
                )
            })?;

        if status.success() {
            return Ok(());
        }
        Err(status.code().map_or_else(
            || ProcessorError::new("bundled processor was terminated"),
            |code| ProcessorError::new(format!("bundled processor exited with code {code}")),
        ))
    }
}

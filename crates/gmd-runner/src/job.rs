//! The unit of work handed to either execution path.

use std::path::{Path, PathBuf};

use gmd_config::{Config, OutputType};

/// Source directory, target directory and output format for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingJob {
    source_dir: PathBuf,
    target_dir: PathBuf,
    output_type: OutputType,
}

impl ProcessingJob {
    /// Creates a job.
    #[must_use]
    pub fn new(
        source_dir: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        output_type: OutputType,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            output_type,
        }
    }

    /// Builds the job described by the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.source_dir().as_std_path(),
            config.target_dir().as_std_path(),
            config.output_type(),
        )
    }

    /// Directory containing the gmd sources, as configured.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Directory receiving the generated documents, as configured.
    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Requested output format.
    #[must_use]
    pub const fn output_type(&self) -> OutputType {
        self.output_type
    }
}

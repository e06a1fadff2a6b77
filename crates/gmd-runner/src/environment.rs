//! Class path assembled from resolved artifacts.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::resolver::ResolvedArtifact;

/// Ordered artifact locations forming the child's class path.
///
/// Order follows the resolver's output and entries are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    entries: Vec<PathBuf>,
}

impl EnvironmentDescriptor {
    /// Collects the locations of `artifacts`, preserving order.
    #[must_use]
    pub fn from_artifacts(artifacts: &[ResolvedArtifact]) -> Self {
        Self {
            entries: artifacts
                .iter()
                .map(|artifact| artifact.path().to_path_buf())
                .collect(),
        }
    }

    /// Artifact locations in class path order.
    #[must_use]
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the descriptor has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins the entries with the platform path separator.
    ///
    /// # Errors
    ///
    /// Returns the offending entry when it already contains the separator
    /// and therefore cannot be represented in a single class path string.
    pub fn joined(&self) -> Result<OsString, &Path> {
        std::env::join_paths(&self.entries).map_err(|_| {
            self.entries
                .iter()
                .find(|entry| std::env::join_paths([entry]).is_err())
                .map_or_else(|| Path::new(""), PathBuf::as_path)
        })
    }
}

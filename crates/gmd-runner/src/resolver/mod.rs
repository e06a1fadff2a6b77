//! Resolution capability adapter.
//!
//! The [`ResolutionCapability`] trait is the seam between the runner and
//! whatever can turn a [`RequirementSet`] into artifact files. The runner asks
//! it exactly once per invocation whether it is available, and if so submits
//! the whole set in a single atomic request.
//!
//! The shipped implementation, [`LocalRepositoryResolver`], looks artifacts
//! up in a local repository laid out in the Maven convention. It does not
//! download and does not walk transitive dependencies.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::requirement::{RequirementId, RequirementSet};

mod local;

pub use local::{LocalRepositoryManager, LocalRepositoryResolver, ResolutionSession};

/// A remote repository recorded in the resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    url: String,
}

impl RemoteRepository {
    /// Creates a repository entry from its URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Repository URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A requirement paired with the file that satisfies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    id: RequirementId,
    path: PathBuf,
}

impl ResolvedArtifact {
    /// Pairs a requirement identity with its resolved file.
    #[must_use]
    pub fn new(id: RequirementId, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    /// Identity of the requirement this artifact satisfies.
    #[must_use]
    pub const fn id(&self) -> &RequirementId {
        &self.id
    }

    /// Absolute location of the artifact file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Errors raised while resolving a requirement set.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Resolution was requested although no session is available.
    #[error("no resolution session is available")]
    SessionUnavailable,

    /// An artifact is not present in the local repository.
    #[error(
        "could not find artifact {coordinate} at {} (repositories: {})",
        path.display(),
        repositories.join(", ")
    )]
    ArtifactNotFound {
        /// Coordinate of the missing artifact.
        coordinate: String,
        /// Location that was checked.
        path: PathBuf,
        /// Remote repositories recorded in the request.
        repositories: Vec<String>,
    },
}

/// Something able to turn requirements into artifact locations.
///
/// The production implementation is [`LocalRepositoryResolver`]. Tests
/// implement this trait to return canned artifacts or failures without
/// touching the filesystem.
pub trait ResolutionCapability {
    /// Whether a usable resolution session exists.
    ///
    /// This is a structural check of the injected session; implementations
    /// must not probe repositories here.
    fn is_available(&self) -> bool;

    /// Resolves every requirement in one request.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if any requirement cannot be resolved;
    /// there is no partial success.
    fn resolve(
        &self,
        requirements: &RequirementSet,
        repositories: &[RemoteRepository],
    ) -> Result<Vec<ResolvedArtifact>, ResolutionError>;
}

impl<T: ResolutionCapability + ?Sized> ResolutionCapability for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn resolve(
        &self,
        requirements: &RequirementSet,
        repositories: &[RemoteRepository],
    ) -> Result<Vec<ResolvedArtifact>, ResolutionError> {
        (**self).resolve(requirements, repositories)
    }
}

//! Resolution against a Maven-layout local repository.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::requirement::{ARTIFACT_EXTENSION, Requirement, RequirementSet};

use super::{RemoteRepository, ResolutionCapability, ResolutionError, ResolvedArtifact};

/// Tracing target for resolver operations.
const RESOLVER_TARGET: &str = "gmd_runner::resolver";

/// Maps requirements onto files below a local repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepositoryManager {
    root: PathBuf,
}

impl LocalRepositoryManager {
    /// Opens the repository rooted at `root`, made absolute.
    ///
    /// Returns `None` when `root` is not an existing directory.
    #[must_use]
    pub fn open(root: impl AsRef<Path>) -> Option<Self> {
        let root = std::path::absolute(root).ok()?;
        root.is_dir().then_some(Self { root })
    }

    /// Repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of `requirement` in the repository layout.
    ///
    /// `<root>/<group as dirs>/<name>/<version>/<name>-<version>[-<classifier>].jar`
    #[must_use]
    pub fn artifact_path(&self, requirement: &Requirement) -> PathBuf {
        let id = requirement.id();
        let version = requirement.version();
        let mut path = self.root.clone();
        path.extend(id.group().split('.'));
        path.push(id.name());
        path.push(version);

        let file_name = id.classifier().map_or_else(
            || format!("{}-{version}.{ARTIFACT_EXTENSION}", id.name()),
            |classifier| format!("{}-{version}-{classifier}.{ARTIFACT_EXTENSION}", id.name()),
        );
        path.push(file_name);
        path
    }
}

/// Resolution state supplied by the host: repositories plus the local cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSession {
    local_repository: Option<LocalRepositoryManager>,
}

impl ResolutionSession {
    /// Creates a session over an optional local repository.
    #[must_use]
    pub const fn new(local_repository: Option<LocalRepositoryManager>) -> Self {
        Self { local_repository }
    }

    /// The local repository manager, when one is present.
    #[must_use]
    pub const fn local_repository(&self) -> Option<&LocalRepositoryManager> {
        self.local_repository.as_ref()
    }
}

/// Resolves requirements from a local repository.
#[derive(Debug, Clone, Default)]
pub struct LocalRepositoryResolver {
    session: Option<ResolutionSession>,
}

impl LocalRepositoryResolver {
    /// Creates a resolver over an injected session.
    #[must_use]
    pub const fn new(session: Option<ResolutionSession>) -> Self {
        Self { session }
    }

    /// Creates a resolver with no session; it always reports unavailable.
    #[must_use]
    pub const fn detached() -> Self {
        Self { session: None }
    }

    fn manager(&self) -> Option<&LocalRepositoryManager> {
        self.session
            .as_ref()
            .and_then(ResolutionSession::local_repository)
    }
}

impl ResolutionCapability for LocalRepositoryResolver {
    fn is_available(&self) -> bool {
        self.manager().is_some()
    }

    fn resolve(
        &self,
        requirements: &RequirementSet,
        repositories: &[RemoteRepository],
    ) -> Result<Vec<ResolvedArtifact>, ResolutionError> {
        let manager = self.manager().ok_or(ResolutionError::SessionUnavailable)?;

        requirements
            .iter()
            .map(|requirement| {
                let path = manager.artifact_path(requirement);
                if !path.is_file() {
                    return Err(ResolutionError::ArtifactNotFound {
                        coordinate: requirement.coordinate(),
                        path,
                        repositories: repositories
                            .iter()
                            .map(|repository| repository.url().to_owned())
                            .collect(),
                    });
                }
                debug!(
                    target: RESOLVER_TARGET,
                    coordinate = %requirement.coordinate(),
                    path = %path.display(),
                    "resolved artifact"
                );
                Ok(ResolvedArtifact::new(requirement.id().clone(), path))
            })
            .collect()
    }
}

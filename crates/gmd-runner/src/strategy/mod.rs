//! Execution strategy selection and the end-to-end run.
//!
//! [`Runner::run`] asks the resolution capability for its availability once
//! and picks one of two topologies from that single answer:
//!
//! - **Isolated**: classify the host, build the requirement set, resolve it,
//!   and run the processor in a child process on the resolved class path.
//! - **Fallback**: warn that bundled versions are in effect and call the
//!   [`Processor`] in-process.
//!
//! Either way the target directory is verified afterwards. Missing and empty
//! source directories short-circuit to success before anything runs.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use gmd_config::Config;
use tracing::{debug, info, warn};

use crate::environment::EnvironmentDescriptor;
use crate::error::RunError;
use crate::guard::SourceState;
use crate::job::ProcessingJob;
use crate::launcher::{Invocation, ProcessLauncher, RuntimeImage};
use crate::platform::HostPlatform;
use crate::processor::Processor;
use crate::requirement::{LibraryVersions, RequirementId, RequirementSet};
use crate::resolver::{RemoteRepository, ResolutionCapability, ResolvedArtifact};
use crate::verify::{TargetStatus, verify_target};

/// Tracing target for strategy selection.
const STRATEGY_TARGET: &str = "gmd_runner::strategy";

/// Which topology runs the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionStrategy {
    /// Child process with a resolved class path.
    Isolated,
    /// In-process call with the ambient class path.
    Fallback,
}

impl ExecutionStrategy {
    /// Chooses the strategy from the resolver's availability.
    #[must_use]
    pub const fn select(resolution_available: bool) -> Self {
        if resolution_available {
            Self::Isolated
        } else {
            Self::Fallback
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isolated => f.write_str("isolated"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Why a run finished without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The source directory does not exist.
    SourceMissing,
    /// The source directory has no entries.
    SourceEmpty,
}

/// Successful result of [`Runner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to process.
    Skipped(SkipReason),
    /// The processor ran.
    Completed {
        /// Topology that ran the processor.
        strategy: ExecutionStrategy,
        /// Post-run state of the target directory.
        target: TargetStatus,
    },
}

/// Inputs of the isolated path that do not vary per job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    versions: LibraryVersions,
    host: HostPlatform,
    repositories: Vec<RemoteRepository>,
    entry_point: String,
    runtime_home: Option<PathBuf>,
}

impl RunSettings {
    /// Derives the settings from configuration for the given host.
    #[must_use]
    pub fn from_config(config: &Config, host: HostPlatform) -> Self {
        Self {
            versions: LibraryVersions::from_config(config),
            host,
            repositories: config
                .remote_repositories()
                .iter()
                .map(RemoteRepository::new)
                .collect(),
            entry_point: config.entry_point().to_owned(),
            runtime_home: config.runtime_home().map(|home| home.as_std_path().to_path_buf()),
        }
    }

    /// Overrides the runtime home used to locate the child's runtime.
    #[must_use]
    pub fn with_runtime_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.runtime_home = Some(home.into());
        self
    }

    /// Library versions requested on the isolated path.
    #[must_use]
    pub const fn versions(&self) -> &LibraryVersions {
        &self.versions
    }

    /// Host the requirement set is built for.
    #[must_use]
    pub const fn host(&self) -> &HostPlatform {
        &self.host
    }

    /// Remote repositories recorded in each resolution request.
    #[must_use]
    pub fn repositories(&self) -> &[RemoteRepository] {
        &self.repositories
    }

    /// Processor entry point.
    #[must_use]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
}

/// Chains the guard, strategy selection, execution and verification.
///
/// Collaborators are injected so the whole flow runs against doubles in
/// tests; production wiring lives in the `gmd` binary.
#[derive(Debug)]
pub struct Runner<R, L, P> {
    resolver: R,
    launcher: L,
    processor: P,
    settings: RunSettings,
}

impl<R, L, P> Runner<R, L, P> {
    /// Creates a runner from its collaborators.
    #[must_use]
    pub const fn new(resolver: R, launcher: L, processor: P, settings: RunSettings) -> Self {
        Self {
            resolver,
            launcher,
            processor,
            settings,
        }
    }

    /// Settings used on the isolated path.
    #[must_use]
    pub const fn settings(&self) -> &RunSettings {
        &self.settings
    }
}

impl<R, L, P> Runner<R, L, P>
where
    R: ResolutionCapability,
    L: ProcessLauncher,
    P: Processor,
{
    /// Processes `job` with whichever strategy the resolver allows.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] for every fatal condition; nothing is retried.
    pub fn run(&self, job: &ProcessingJob) -> Result<RunOutcome, RunError> {
        match SourceState::inspect(job.source_dir())? {
            SourceState::Missing => {
                warn!(
                    target: STRATEGY_TARGET,
                    source_dir = %job.source_dir().display(),
                    "source directory {} does not exist, nothing to do",
                    job.source_dir().display()
                );
                return Ok(RunOutcome::Skipped(SkipReason::SourceMissing));
            }
            SourceState::Empty => {
                warn!(
                    target: STRATEGY_TARGET,
                    source_dir = %job.source_dir().display(),
                    "no gmd files found in {}, nothing to do",
                    job.source_dir().display()
                );
                return Ok(RunOutcome::Skipped(SkipReason::SourceEmpty));
            }
            SourceState::Ready => {}
        }

        let strategy = ExecutionStrategy::select(self.resolver.is_available());
        debug!(target: STRATEGY_TARGET, %strategy, "selected execution strategy");
        match strategy {
            ExecutionStrategy::Isolated => self.run_isolated(job)?,
            ExecutionStrategy::Fallback => self.run_fallback(job)?,
        }

        let target = verify_target(job.target_dir());
        Ok(RunOutcome::Completed { strategy, target })
    }

    fn run_isolated(&self, job: &ProcessingJob) -> Result<(), RunError> {
        let requirements = RequirementSet::for_host(&self.settings.versions, &self.settings.host)?;
        let artifacts = self
            .resolver
            .resolve(&requirements, &self.settings.repositories)?;
        report_shortfall(&requirements, &artifacts);

        let environment = EnvironmentDescriptor::from_artifacts(&artifacts);
        let runtime = RuntimeImage::locate(self.settings.runtime_home.as_deref())?;
        let invocation =
            Invocation::build(&runtime, &environment, &self.settings.entry_point, job)?;
        info!(
            target: STRATEGY_TARGET,
            artifacts = environment.len(),
            runtime = %runtime.executable().display(),
            "running processor in a child process"
        );
        self.launcher.launch(&invocation)
    }

    fn run_fallback(&self, job: &ProcessingJob) -> Result<(), RunError> {
        warn!(
            target: STRATEGY_TARGET,
            "cannot resolve custom dependencies, using bundled versions"
        );
        self.processor
            .process(job.source_dir(), job.target_dir(), job.output_type())
            .map_err(|error| RunError::processing(job.source_dir(), error.into()))
    }
}

/// Warns about requirements the resolver returned no artifact for.
///
/// Such a result is passed through unchanged; the processor may still cope
/// if the missing library is optional.
fn report_shortfall(requirements: &RequirementSet, artifacts: &[ResolvedArtifact]) {
    let resolved: HashSet<&RequirementId> = artifacts.iter().map(ResolvedArtifact::id).collect();
    for requirement in requirements {
        if !resolved.contains(requirement.id()) {
            warn!(
                target: STRATEGY_TARGET,
                requirement = %requirement.coordinate(),
                "resolver returned no artifact for requirement"
            );
        }
    }
}

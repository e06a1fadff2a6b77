//! Orchestration for running the gmd document processor.
//!
//! The `gmd-runner` crate decides how a directory of gmd sources is turned
//! into Markdown, HTML or PDF output. When a [`ResolutionCapability`] is
//! available the processor runs in a child runtime on a class path built
//! from exact library versions for the host platform. Otherwise the bundled
//! [`Processor`] is called in-process.
//!
//! # Architecture
//!
//! [`Runner`] owns three collaborators behind traits so that each seam can
//! be replaced in tests:
//!
//! - a [`ResolutionCapability`] that turns a [`RequirementSet`] into
//!   [`ResolvedArtifact`] locations,
//! - a [`ProcessLauncher`] that runs an [`Invocation`] to completion, and
//! - a [`Processor`] for the fallback path.
//!
//! # Example
//!
//! ```rust,no_run
//! use gmd_config::Config;
//! use gmd_runner::{
//!     AmbientProcessor, ChildProcessLauncher, HostPlatform, LocalRepositoryResolver,
//!     ProcessingJob, RunSettings, Runner,
//! };
//!
//! let config = Config::default();
//! let runner = Runner::new(
//!     LocalRepositoryResolver::detached(),
//!     ChildProcessLauncher,
//!     AmbientProcessor::new(None, config.entry_point()),
//!     RunSettings::from_config(&config, HostPlatform::current()),
//! );
//! let outcome = runner.run(&ProcessingJob::from_config(&config));
//! ```

pub mod environment;
pub mod error;
pub mod guard;
pub mod job;
pub mod launcher;
pub mod platform;
pub mod processor;
pub mod requirement;
pub mod resolver;
pub mod strategy;
pub mod verify;

#[cfg(test)]
mod tests;

pub use self::environment::EnvironmentDescriptor;
pub use self::error::{ErrorKind, ProcessingFailure, RunError};
pub use self::guard::SourceState;
pub use self::job::ProcessingJob;
pub use self::launcher::{ChildProcessLauncher, Invocation, ProcessLauncher, RuntimeImage};
pub use self::platform::{HostPlatform, PlatformTag};
pub use self::processor::{AmbientProcessor, Processor, ProcessorError};
pub use self::requirement::{LibraryVersions, Requirement, RequirementId, RequirementSet};
pub use self::resolver::{
    LocalRepositoryManager, LocalRepositoryResolver, RemoteRepository, ResolutionCapability,
    ResolutionError, ResolutionSession, ResolvedArtifact,
};
pub use self::strategy::{ExecutionStrategy, RunOutcome, RunSettings, Runner, SkipReason};
pub use self::verify::{TargetStatus, verify_target};

//! Crate-level test doubles and behavioural tests.

use std::path::Path;

use gmd_config::OutputType;
use mockall::mock;

use crate::error::RunError;
use crate::launcher::{Invocation, ProcessLauncher};
use crate::processor::{Processor, ProcessorError};
use crate::requirement::RequirementSet;
use crate::resolver::{RemoteRepository, ResolutionCapability, ResolutionError, ResolvedArtifact};


mock! {
    pub Resolver {}
    impl ResolutionCapability for Resolver {
        fn is_available(&self) -> bool;
        fn resolve(
            &self,
            requirements: &RequirementSet,
            repositories: &[RemoteRepository],
        ) -> Result<Vec<ResolvedArtifact>, ResolutionError>;
    }
}

mock! {
    pub Launcher {}
    impl ProcessLauncher for Launcher {
        fn launch(&self, invocation: &Invocation) -> Result<(), RunError>;
    }
}

mock! {
    pub BundledProcessor {}
    impl Processor for BundledProcessor {
        fn process(
            &self,
            source_dir: &Path,
            target_dir: &Path,
            output_type: OutputType,
        ) -> Result<(), ProcessorError>;
    }
}

/// Resolver double that satisfies every requirement from `/m2`.
pub(crate) fn resolving_resolver() -> MockResolver {
    let mut resolver = MockResolver::new();
    resolver.expect_is_available().once().return_const(true);
    resolver
        .expect_resolve()
        .once()
        .returning(|requirements, _repositories| {
            Ok(requirements
                .iter()
                .map(|requirement| {
                    ResolvedArtifact::new(
                        requirement.id().clone(),
                        Path::new("/m2").join(format!("{}.jar", requirement.id().name())),
                    )
                })
                .collect())
        });
    resolver
}

/// Resolver double reporting no session.
pub(crate) fn unavailable_resolver() -> MockResolver {
    let mut resolver = MockResolver::new();
    resolver.expect_is_available().once().return_const(false);
    resolver.expect_resolve().never();
    resolver
}

/// Resolver double that must not be consulted at all.
pub(crate) fn unused_resolver() -> MockResolver {
    let mut resolver = MockResolver::new();
    resolver.expect_is_available().never();
    resolver.expect_resolve().never();
    resolver
}

/// Launcher double that must not be called.
pub(crate) fn unused_launcher() -> MockLauncher {
    let mut launcher = MockLauncher::new();
    launcher.expect_launch().never();
    launcher
}

/// Processor double that must not be called.
pub(crate) fn unused_processor() -> MockBundledProcessor {
    let mut processor = MockBundledProcessor::new();
    processor.expect_process().never();
    processor
}

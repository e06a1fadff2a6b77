//! Command-line runtime for the gmd processor.
//!
//! [`run`] loads layered configuration, installs telemetry and drives a
//! [`gmd_runner::Runner`] wired with the production collaborators: a
//! resolver over the configured local repository, a child process launcher
//! and the bundled processor. Failures are written to the supplied error
//! stream and mapped to distinct exit codes.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use gmd_config::Config;
use gmd_runner::{
    AmbientProcessor, ChildProcessLauncher, HostPlatform, LocalRepositoryManager,
    LocalRepositoryResolver, ProcessingJob, ResolutionSession, RunOutcome, RunSettings, Runner,
    RuntimeImage,
};
use ortho_config::OrthoConfig;
use tracing::debug;

mod errors;
pub mod telemetry;

use errors::AppError;

/// Tracing target for the command-line runtime.
const CLI_TARGET: &str = "gmd_cli";

/// Runs the `gmd` command with `args`, reporting failures on `stderr`.
#[must_use]
pub fn run<I, E>(args: I, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    E: Write,
{
    match try_run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => error.report(stderr),
    }
}

fn try_run<I>(args: I) -> Result<RunOutcome, AppError>
where
    I: IntoIterator<Item = OsString>,
{
    let config = Config::load_from_iter(args).map_err(AppError::LoadConfiguration)?;
    telemetry::initialise(&config)?;
    Ok(execute(&config)?)
}

/// Processes the configured source directory with production collaborators.
///
/// # Errors
///
/// Returns the [`gmd_runner::RunError`] that aborted the run.
pub fn execute(config: &Config) -> Result<RunOutcome, gmd_runner::RunError> {
    let runtime_home = config.runtime_home().map(|home| home.as_std_path());
    let runner = Runner::new(
        resolver_for(config),
        ChildProcessLauncher,
        AmbientProcessor::new(RuntimeImage::locate(runtime_home).ok(), config.entry_point()),
        RunSettings::from_config(config, HostPlatform::current()),
    );
    runner.run(&ProcessingJob::from_config(config))
}

/// Builds a resolver whose session exists only if the local repository does.
fn resolver_for(config: &Config) -> LocalRepositoryResolver {
    config
        .local_repository()
        .and_then(|path| LocalRepositoryManager::open(path.as_std_path()))
        .map_or_else(
            || {
                debug!(target: CLI_TARGET, "no local repository available");
                LocalRepositoryResolver::detached()
            },
            |manager| {
                debug!(
                    target: CLI_TARGET,
                    repository = %manager.root().display(),
                    "opened local repository"
                );
                LocalRepositoryResolver::new(Some(ResolutionSession::new(Some(manager))))
            },
        )
}

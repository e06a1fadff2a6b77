//! Isolated execution of the processor in a child process.
//!
//! [`Invocation::build`] turns a resolved [`EnvironmentDescriptor`] into a
//! command line for the runtime the build is pinned to, and a
//! [`ProcessLauncher`] runs it. [`ChildProcessLauncher`] connects the child's
//! standard streams directly to ours so the processor's own logging reaches
//! the user unbuffered, then blocks until the child exits. No timeout is
//! applied and nothing is retried.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;

use tracing::debug;

use crate::environment::EnvironmentDescriptor;
use crate::error::{ProcessingFailure, RunError};
use crate::job::ProcessingJob;

/// Tracing target for child process operations.
const LAUNCHER_TARGET: &str = "gmd_runner::launcher";

/// Environment variable naming the runtime home when none is configured.
pub const RUNTIME_HOME_ENV: &str = "JAVA_HOME";

/// Flag introducing the class path on the runtime's command line.
pub const CLASS_PATH_FLAG: &str = "-cp";

#[cfg(windows)]
const RUNTIME_EXECUTABLE: &str = "java.exe";
#[cfg(not(windows))]
const RUNTIME_EXECUTABLE: &str = "java";

/// The runtime executable a child processor runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeImage {
    executable: PathBuf,
    path_flag: String,
}

impl RuntimeImage {
    /// Creates an image from an explicit executable and class path flag.
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>, path_flag: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            path_flag: path_flag.into(),
        }
    }

    /// The runtime installed under `home`, i.e. `<home>/bin/java`.
    #[must_use]
    pub fn from_home(home: &Path) -> Self {
        Self::new(home.join("bin").join(RUNTIME_EXECUTABLE), CLASS_PATH_FLAG)
    }

    /// Locates the runtime from the configured home, else `JAVA_HOME`.
    ///
    /// The executable is never looked up on `PATH`: the child must run under
    /// the runtime the build was configured for.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::LaunchFailed`] when neither source names a home.
    pub fn locate(configured_home: Option<&Path>) -> Result<Self, RunError> {
        locate_with(configured_home, std::env::var_os(RUNTIME_HOME_ENV))
    }

    /// Path of the runtime executable.
    #[must_use]
    pub const fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Flag preceding the joined class path.
    #[must_use]
    pub fn path_flag(&self) -> &str {
        &self.path_flag
    }
}

fn locate_with(
    configured_home: Option<&Path>,
    env_home: Option<OsString>,
) -> Result<RuntimeImage, RunError> {
    if let Some(home) = configured_home {
        return Ok(RuntimeImage::from_home(home));
    }
    env_home
        .filter(|home| !home.is_empty())
        .map(|home| RuntimeImage::from_home(Path::new(&home)))
        .ok_or_else(|| RunError::LaunchFailed {
            program: PathBuf::from(RUNTIME_EXECUTABLE),
            message: format!("no runtime home configured and {RUNTIME_HOME_ENV} is not set"),
            source: None,
        })
}

/// A fully built child process command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    source_dir: PathBuf,
}

impl Invocation {
    /// Builds the command line running `entry_point` over `job`.
    ///
    /// Arguments are, in order: the runtime's class path flag, the joined
    /// descriptor, the entry point, the canonical source directory, the
    /// canonical target directory and the output type. The target directory
    /// need not exist yet; it is made absolute instead of canonical then.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Io`] when the source directory cannot be
    /// canonicalised and [`RunError::LaunchFailed`] when the descriptor
    /// cannot be joined into one class path string.
    pub fn build(
        runtime: &RuntimeImage,
        environment: &EnvironmentDescriptor,
        entry_point: &str,
        job: &ProcessingJob,
    ) -> Result<Self, RunError> {
        let class_path = environment
            .joined()
            .map_err(|entry| RunError::LaunchFailed {
                program: runtime.executable().clone(),
                message: format!(
                    "class path entry {} contains the path separator",
                    entry.display()
                ),
                source: None,
            })?;
        let source_dir = job
            .source_dir()
            .canonicalize()
            .map_err(|error| RunError::io(job.source_dir(), error))?;
        let target_dir = canonical_or_absolute(job.target_dir())?;

        let args = vec![
            OsString::from(runtime.path_flag()),
            class_path,
            OsString::from(entry_point),
            source_dir.clone().into_os_string(),
            target_dir.into_os_string(),
            OsString::from(job.output_type().as_str()),
        ];
        Ok(Self {
            program: runtime.executable().clone(),
            args,
            source_dir,
        })
    }

    /// Program to execute.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments following the program.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Canonical source directory the child processes.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

fn canonical_or_absolute(path: &Path) -> Result<PathBuf, RunError> {
    match path.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(_) => std::path::absolute(path).map_err(|error| RunError::io(path, error)),
    }
}

/// Trait abstracting child process execution for testability.
///
/// The production implementation is [`ChildProcessLauncher`]. Test code can
/// implement this trait to record invocations without spawning anything.
pub trait ProcessLauncher {
    /// Runs `invocation` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::LaunchFailed`] if the child cannot be started and
    /// [`RunError::ProcessingFailed`] if it exits unsuccessfully.
    fn launch(&self, invocation: &Invocation) -> Result<(), RunError>;
}

impl<T: ProcessLauncher + ?Sized> ProcessLauncher for &T {
    fn launch(&self, invocation: &Invocation) -> Result<(), RunError> {
        (**self).launch(invocation)
    }
}

/// Launches the processor as a child process with inherited standard I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChildProcessLauncher;

impl ProcessLauncher for ChildProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<(), RunError> {
        debug!(
            target: LAUNCHER_TARGET,
            program = %invocation.program().display(),
            args = ?invocation.args().iter().map(|arg| arg.as_os_str()).collect::<Vec<&OsStr>>(),
            "spawning processor"
        );

        let launch_failed = |message: &str, error: std::io::Error| RunError::LaunchFailed {
            program: invocation.program().to_path_buf(),
            message: format!("{message}: {error}"),
            source: Some(Arc::new(error)),
        };

        let mut child = invocation
            .command()
            .spawn()
            .map_err(|error| launch_failed("failed to start processor", error))?;
        let status = child
            .wait()
            .map_err(|error| launch_failed("failed to wait for processor", error))?;

        debug!(target: LAUNCHER_TARGET, ?status, "processor exited");
        check_status(invocation.source_dir(), status)
    }
}

fn check_status(source_dir: &Path, status: ExitStatus) -> Result<(), RunError> {
    if status.success() {
        return Ok(());
    }
    let cause = status
        .code()
        .map_or(ProcessingFailure::Terminated, ProcessingFailure::ExitStatus);
    Err(RunError::processing(source_dir, cause))
}

//! Shared configuration for the gmd build tooling.
//!
//! Configuration is layered by [`ortho_config`]: built-in defaults, then an
//! optional TOML file (`--config-path` or `GMD_CONFIG_PATH`), then `GMD_*`
//! environment variables, then command-line flags. Every field therefore
//! doubles as a `--kebab-case` flag of the `gmd` binary.
//!
//! The defaults mirror the conventional project layout: sources live in
//! `src/main/gmd`, generated documents land in `target/gmd`, and the
//! processor libraries are pinned to versions known to work together.

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;
mod output;

pub use defaults::{
    DEFAULT_ENTRY_POINT, DEFAULT_GMD_VERSION, DEFAULT_GROOVY_VERSION, DEFAULT_IVY_VERSION,
    DEFAULT_JAVAFX_VERSION, DEFAULT_LOG_FILTER, DEFAULT_LOG4J_VERSION, DEFAULT_REMOTE_REPOSITORY,
    DEFAULT_SOURCE_DIR, DEFAULT_TARGET_DIR, default_entry_point, default_gmd_version,
    default_groovy_version, default_ivy_version, default_javafx_version, default_local_repository,
    default_log_filter, default_log_format, default_log4j_version, default_output_type,
    default_remote_repositories, default_source_dir, default_target_dir,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use output::{OutputType, OutputTypeParseError};

/// Runtime configuration for one gmd processing invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "GMD")]
pub struct Config {
    /// Directory containing the gmd sources.
    #[ortho_config(default = default_source_dir())]
    pub source_dir: Utf8PathBuf,
    /// Directory receiving the generated documents.
    #[ortho_config(default = default_target_dir())]
    pub target_dir: Utf8PathBuf,
    /// Format the processor should produce.
    #[ortho_config(default = default_output_type())]
    pub output_type: OutputType,
    /// Groovy runtime version placed on the processor class path.
    #[ortho_config(default = default_groovy_version())]
    pub groovy_version: String,
    /// Log4j version placed on the processor class path.
    #[ortho_config(default = default_log4j_version())]
    pub log4j_version: String,
    /// gmd-core version, i.e. the processor itself.
    #[ortho_config(default = default_gmd_version())]
    pub gmd_version: String,
    /// Apache Ivy version used by Groovy's `@Grab` support.
    #[ortho_config(default = default_ivy_version())]
    pub ivy_version: String,
    /// JavaFX version; its modules are resolved per platform.
    #[ortho_config(default = default_javafx_version())]
    pub javafx_version: String,
    /// Local artifact repository consulted by the resolver.
    ///
    /// Falls back to `~/.m2/repository` when unset.
    pub local_repository: Option<Utf8PathBuf>,
    /// Remote repositories recorded in the resolution session.
    #[ortho_config(default = default_remote_repositories())]
    pub remote_repositories: Vec<String>,
    /// Home directory of the runtime the processor runs under.
    ///
    /// Falls back to `JAVA_HOME` when unset.
    pub runtime_home: Option<Utf8PathBuf>,
    /// Fully qualified name of the processor entry point.
    #[ortho_config(default = default_entry_point())]
    pub entry_point: String,
    /// Tracing filter expression.
    #[ortho_config(default = default_log_filter())]
    pub log_filter: String,
    /// Tracing output format.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            target_dir: default_target_dir(),
            output_type: default_output_type(),
            groovy_version: default_groovy_version(),
            log4j_version: default_log4j_version(),
            gmd_version: default_gmd_version(),
            ivy_version: default_ivy_version(),
            javafx_version: default_javafx_version(),
            local_repository: None,
            remote_repositories: default_remote_repositories(),
            runtime_home: None,
            entry_point: default_entry_point(),
            log_filter: default_log_filter(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Directory containing the gmd sources.
    #[must_use]
    pub fn source_dir(&self) -> &Utf8PathBuf {
        &self.source_dir
    }

    /// Directory receiving the generated documents.
    #[must_use]
    pub fn target_dir(&self) -> &Utf8PathBuf {
        &self.target_dir
    }

    /// Format the processor should produce.
    #[must_use]
    pub const fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// Local repository, falling back to the conventional user location.
    #[must_use]
    pub fn local_repository(&self) -> Option<Utf8PathBuf> {
        self.local_repository
            .clone()
            .or_else(default_local_repository)
    }

    /// Remote repositories recorded in the resolution session.
    #[must_use]
    pub fn remote_repositories(&self) -> &[String] {
        &self.remote_repositories
    }

    /// Configured runtime home, if any.
    #[must_use]
    pub fn runtime_home(&self) -> Option<&Utf8PathBuf> {
        self.runtime_home.as_ref()
    }

    /// Fully qualified name of the processor entry point.
    #[must_use]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Tracing output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_conventional_layout() {
        let config = Config::default();
        assert_eq!(config.source_dir().as_str(), "src/main/gmd");
        assert_eq!(config.target_dir().as_str(), "target/gmd");
        assert_eq!(config.output_type(), OutputType::Md);
        assert_eq!(config.entry_point(), "se.alipsa.gmd.core.GmdProcessor");
    }

    #[test]
    fn explicit_local_repository_wins_over_home_default() {
        let config = Config {
            local_repository: Some(Utf8PathBuf::from("/srv/m2")),
            ..Config::default()
        };
        assert_eq!(
            config.local_repository(),
            Some(Utf8PathBuf::from("/srv/m2"))
        );
    }

    #[test]
    fn unset_local_repository_uses_home_layout() {
        let config = Config::default();
        if let Some(path) = config.local_repository() {
            assert!(path.ends_with(".m2/repository"), "unexpected path: {path}");
        }
    }
}

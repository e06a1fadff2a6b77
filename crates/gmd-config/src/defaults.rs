use camino::Utf8PathBuf;

use crate::logging::LogFormat;
use crate::output::OutputType;

/// Default directory holding the gmd sources, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "src/main/gmd";

/// Default directory receiving the generated documents.
pub const DEFAULT_TARGET_DIR: &str = "target/gmd";

/// Default Groovy runtime version.
pub const DEFAULT_GROOVY_VERSION: &str = "5.0.4";

/// Default Log4j version.
pub const DEFAULT_LOG4J_VERSION: &str = "2.25.3";

/// Default gmd-core version.
pub const DEFAULT_GMD_VERSION: &str = "3.0.2";

/// Default Apache Ivy version.
pub const DEFAULT_IVY_VERSION: &str = "2.5.3";

/// Default JavaFX version.
pub const DEFAULT_JAVAFX_VERSION: &str = "23.0.2";

/// Fully qualified name of the processor entry point.
pub const DEFAULT_ENTRY_POINT: &str = "se.alipsa.gmd.core.GmdProcessor";

/// Repository consulted when none are configured.
pub const DEFAULT_REMOTE_REPOSITORY: &str = "https://repo.maven.apache.org/maven2";

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default source directory as an owned path.
pub fn default_source_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_SOURCE_DIR)
}

/// Default target directory as an owned path.
pub fn default_target_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_TARGET_DIR)
}

/// Default output type.
pub fn default_output_type() -> OutputType {
    OutputType::Md
}

/// Owned Groovy version used where allocation is required (e.g. serde).
pub fn default_groovy_version() -> String {
    DEFAULT_GROOVY_VERSION.to_owned()
}

/// Owned Log4j version.
pub fn default_log4j_version() -> String {
    DEFAULT_LOG4J_VERSION.to_owned()
}

/// Owned gmd-core version.
pub fn default_gmd_version() -> String {
    DEFAULT_GMD_VERSION.to_owned()
}

/// Owned Ivy version.
pub fn default_ivy_version() -> String {
    DEFAULT_IVY_VERSION.to_owned()
}

/// Owned JavaFX version.
pub fn default_javafx_version() -> String {
    DEFAULT_JAVAFX_VERSION.to_owned()
}

/// Owned processor entry point.
pub fn default_entry_point() -> String {
    DEFAULT_ENTRY_POINT.to_owned()
}

/// Remote repositories recorded in the resolution session by default.
pub fn default_remote_repositories() -> Vec<String> {
    vec![DEFAULT_REMOTE_REPOSITORY.to_owned()]
}

/// Conventional local repository below the user's home directory.
///
/// Returns `None` when the home directory cannot be determined or is not
/// valid UTF-8; the resolver then reports itself unavailable.
pub fn default_local_repository() -> Option<Utf8PathBuf> {
    dirs::home_dir()
        .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
        .map(|home| home.join(".m2").join("repository"))
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
pub fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

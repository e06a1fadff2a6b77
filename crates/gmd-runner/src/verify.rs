//! Post-run diagnostics on the target directory.
//!
//! The check never changes the outcome of a run; it only reports whether
//! the processor left its output where it was told to.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Tracing target for outcome verification.
const VERIFY_TARGET: &str = "gmd_runner::verify";

/// Whether the target directory exists after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// The directory exists; holds its canonical path.
    Present(PathBuf),
    /// Nothing exists at the configured path.
    Absent(PathBuf),
}

impl TargetStatus {
    /// Whether the target directory exists.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Checks `target_dir` and logs the result.
pub fn verify_target(target_dir: &Path) -> TargetStatus {
    if target_dir.exists() {
        let canonical = target_dir
            .canonicalize()
            .unwrap_or_else(|_| target_dir.to_path_buf());
        info!(
            target: VERIFY_TARGET,
            target_dir = %canonical.display(),
            "gmd files processed and written to {}",
            canonical.display()
        );
        return TargetStatus::Present(canonical);
    }

    let absolute = std::path::absolute(target_dir).unwrap_or_else(|_| target_dir.to_path_buf());
    warn!(
        target: VERIFY_TARGET,
        target_dir = %absolute.display(),
        "{} should exist but does not, something is probably wrong",
        absolute.display()
    );
    TargetStatus::Absent(absolute)
}

//! Host platform classification.
//!
//! The GUI toolkit publishes native artifacts per operating system, selected
//! by a Maven classifier. [`HostPlatform::classify`] maps free-form OS and
//! architecture strings onto the closed [`PlatformTag`] set. Matching is
//! case-insensitive substring matching, checked in a fixed order, so that
//! strings such as `Mac OS X` or `Windows 11` classify the same way the
//! toolkit's own tooling does.

use std::fmt;

use crate::error::RunError;

/// Classifier selecting an OS-specific artifact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    /// macOS on Intel.
    Mac,
    /// macOS on Apple silicon.
    MacAarch64,
    /// Linux.
    Linux,
    /// Windows.
    Win,
}

impl PlatformTag {
    /// Returns the Maven classifier string for this platform.
    #[must_use]
    pub const fn classifier(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::MacAarch64 => "mac-aarch64",
            Self::Linux => "linux",
            Self::Win => "win",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.classifier())
    }
}

/// Raw OS identification of the machine running the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    os_name: String,
    os_arch: String,
}

impl HostPlatform {
    /// Describes a host by its OS name and architecture.
    #[must_use]
    pub fn new(os_name: impl Into<String>, os_arch: impl Into<String>) -> Self {
        Self {
            os_name: os_name.into(),
            os_arch: os_arch.into(),
        }
    }

    /// Describes the host this process runs on.
    #[must_use]
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Operating system name as reported.
    #[must_use]
    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    /// Architecture as reported.
    #[must_use]
    pub fn os_arch(&self) -> &str {
        &self.os_arch
    }

    /// Maps the host onto a [`PlatformTag`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::UnsupportedPlatform`] when the OS name matches none
    /// of the known families. There is no default platform.
    pub fn classify(&self) -> Result<PlatformTag, RunError> {
        let os_name = self.os_name.to_lowercase();
        let os_arch = self.os_arch.to_lowercase();

        if os_name.contains("mac") || os_name.contains("darwin") {
            if os_arch.contains("aarch64") || os_arch.contains("arm") {
                return Ok(PlatformTag::MacAarch64);
            }
            return Ok(PlatformTag::Mac);
        }
        if os_name.contains("linux") {
            return Ok(PlatformTag::Linux);
        }
        if os_name.contains("win") {
            return Ok(PlatformTag::Win);
        }
        Err(RunError::UnsupportedPlatform {
            os_name: self.os_name.clone(),
            os_arch: self.os_arch.clone(),
        })
    }
}

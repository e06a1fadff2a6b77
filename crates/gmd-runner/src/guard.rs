//! Pre-flight inspection of the source directory.

use std::fs;
use std::path::Path;

use crate::error::RunError;

/// What the source directory looks like before any work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    /// Nothing exists at the configured path.
    Missing,
    /// The directory exists but holds no entries.
    Empty,
    /// The directory holds at least one entry.
    Ready,
}

impl SourceState {
    /// Inspects `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SourceNotDirectory`] when `path` names something
    /// other than a directory, or [`RunError::Io`] when it cannot be read.
    pub fn inspect(path: &Path) -> Result<Self, RunError> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::Missing);
            }
            Err(error) => return Err(RunError::io(path, error)),
        };
        if !metadata.is_dir() {
            return Err(RunError::SourceNotDirectory {
                path: path.to_path_buf(),
            });
        }

        let mut entries = fs::read_dir(path).map_err(|error| RunError::io(path, error))?;
        match entries.next() {
            None => Ok(Self::Empty),
            Some(Ok(_)) => Ok(Self::Ready),
            Some(Err(error)) => Err(RunError::io(path, error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn missing_directory_is_reported_as_missing() {
        let dir = TempDir::new().expect("temp dir");
        let state = SourceState::inspect(&dir.path().join("gmd")).expect("inspect");
        assert_eq!(state, SourceState::Missing);
    }

    #[test]
    fn empty_directory_is_reported_as_empty() {
        let dir = TempDir::new().expect("temp dir");
        assert_eq!(
            SourceState::inspect(dir.path()).expect("inspect"),
            SourceState::Empty
        );
    }

    #[test]
    fn directory_with_a_file_is_ready() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("index.gmd"), "# Title\n").expect("write source");
        assert_eq!(
            SourceState::inspect(dir.path()).expect("inspect"),
            SourceState::Ready
        );
    }

    #[test]
    fn plain_file_is_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("index.gmd");
        fs::write(&file, "# Title\n").expect("write source");
        let err = SourceState::inspect(&file).expect_err("file is not a directory");
        assert_eq!(err.kind(), ErrorKind::InvalidSource);
        assert!(matches!(err, RunError::SourceNotDirectory { .. }));
    }
}

//! Filesystem access used when writing compiled CSS.

use std::fs;
use std::io;
use std::path::Path;

use crate::destination::PathKind;
use crate::error::{Result, SassBuildError};

/// Filesystem operations needed by a run.
pub trait OutputFs {
    /// # Errors
    ///
    /// Returns [`SassBuildError::Stat`] for any failure other than not-found.
    fn stat(&self, path: &Path) -> Result<PathKind>;

    /// # Errors
    ///
    /// Returns [`SassBuildError::Write`] when the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// The local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl OutputFs for LocalFs {
    fn stat(&self, path: &Path) -> Result<PathKind> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Ok(PathKind::IsDirectory),
            Ok(_) => Ok(PathKind::IsFileOrOther),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(PathKind::NotFound),
            Err(source) => Err(SassBuildError::Stat {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let write_error = |source| SassBuildError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, contents).map_err(write_error)
    }
}

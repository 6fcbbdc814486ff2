//! Filesystem utilities.
//!
//! Raw file read/write for attachment and export handling, directory
//! creation, and local-file URI construction. All functions integrate with
//! the crate's error handling by returning [`PlatformError`]; file handles
//! are scoped inside the underlying `std::fs` calls and released on every
//! exit path.

use std::fs;
use std::path::Path;

use crate::error::PlatformError;
use crate::types::uri::Uri;

/// Ensures that a directory exists at the given path.
///
/// Missing directories are created recursively. If the path exists but is
/// not a directory, an error is returned.
///
/// # Errors
///
/// Returns [`PlatformError::Filesystem`] if the path is occupied by a
/// non-directory or if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<(), PlatformError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(PlatformError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| PlatformError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads the entire contents of a file into a byte vector.
///
/// # Errors
///
/// Returns [`PlatformError::Filesystem`] if the file cannot be opened or
/// read.
pub fn read_file(path: &Path) -> Result<Vec<u8>, PlatformError> {
    fs::read(path).map_err(|e| PlatformError::Filesystem {
        message: "Failed to read file".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes bytes to a file, replacing any previous contents.
///
/// The parent directory is created recursively if it does not exist. The
/// file itself is created if absent and truncated otherwise.
///
/// # Errors
///
/// Returns [`PlatformError::Filesystem`] if the parent directory cannot be
/// created or the write fails (permissions, disk space, path is a
/// directory).
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), PlatformError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, bytes).map_err(|e| PlatformError::Filesystem {
        message: "Failed to write file".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Produces the canonical local-file URI for a path.
///
/// Alias for [`Uri::from_file_path`], kept at the filesystem surface next
/// to the read/write helpers that produce the paths being shared.
pub fn file_to_uri(path: &Path) -> Uri {
    Uri::from_file_path(path)
}

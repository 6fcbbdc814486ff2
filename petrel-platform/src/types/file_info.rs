//! File metadata record.

use serde::{Deserialize, Serialize};

/// Name and size of a file, as resolved for a URI.
///
/// This is an immutable snapshot produced by
/// [`get_file_info`](crate::content::get_file_info); it has no lifecycle of
/// its own beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    /// Display name of the file (for local files, the last path segment).
    pub name: String,
    /// Size of the file in bytes.
    pub size: u64,
}

impl FileInfo {
    /// Creates a new `FileInfo`.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        FileInfo {
            name: name.into(),
            size,
        }
    }
}

//! Content resolution: file name and size for a URI.
//!
//! Attachments arrive in the client either as local files or as
//! provider-mediated `content://` resources whose metadata must be queried
//! rather than read from the filesystem. This module defines the
//! [`ContentProvider`] capability trait for that query and the
//! [`get_file_info`] operation that resolves a [`FileInfo`] for any
//! supported URI.
//!
//! The provider is an injected interface so resolution stays testable
//! without a real OS content resolver behind it.

use std::fs;
use std::io;

use thiserror::Error;

use crate::error::PlatformError;
use crate::types::file_info::FileInfo;
use crate::types::uri::{Uri, UriTarget};

/// One metadata row returned by a provider query.
///
/// Mirrors the openable-resource columns of the platform resolver:
/// `_display_name` (which providers may leave unset) and `_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRow {
    /// Display name of the resource, if the provider supplied one.
    pub display_name: Option<String>,
    /// Size of the resource in bytes.
    pub size: u64,
}

/// Error type for content provider queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The platform raised a security fault for the resource.
    #[error("access to content resource denied: {0}")]
    AccessDenied(String),

    /// The query failed for any other reason.
    #[error("content provider query failed: {0}")]
    Query(String),
}

/// Capability interface for querying metadata of `content://` resources.
///
/// Implemented by the host shell over the real OS resolver; tests supply
/// in-memory implementations.
pub trait ContentProvider {
    /// Queries the metadata row for `uri`.
    ///
    /// Returns `Ok(None)` when the query succeeds but yields no row.
    fn query(&self, uri: &Uri) -> Result<Option<ContentRow>, ProviderError>;
}

/// Resolves the display name and byte size for a URI.
///
/// Dispatches on [`Uri::target`]:
///
/// - **Local files** (`file` scheme or none): the name is the last path
///   segment and the size is the filesystem byte length.
/// - **Content resources** (`content` scheme): the provider is queried. A
///   row without a display name falls back to the URI's last path segment;
///   some providers leave the name unset even though the platform contract
///   says they should default it themselves.
/// - **Anything else** fails with [`PlatformError::UnresolvableScheme`].
///
/// # Errors
///
/// - [`PlatformError::NotFound`] if the resource vanished: the local file is
///   gone, the query returned no row, or the provider raised a security
///   fault. The platform reports a security fault for resources deleted
///   while a URI to them is still held, so it is reinterpreted as not-found.
/// - [`PlatformError::Filesystem`] for local metadata failures other than a
///   missing file.
/// - [`PlatformError::Provider`] for provider failures other than a
///   security fault.
/// - [`PlatformError::UnresolvableScheme`] for unsupported schemes; the
///   caller cannot recover from this.
pub fn get_file_info(
    provider: &dyn ContentProvider,
    uri: &Uri,
) -> Result<FileInfo, PlatformError> {
    match uri.target() {
        UriTarget::LocalFile(path) => {
            let name = uri
                .last_segment()
                .ok_or_else(|| PlatformError::NotFound(uri.to_string()))?;
            let metadata = fs::metadata(&path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PlatformError::NotFound(uri.to_string())
                } else {
                    PlatformError::Filesystem {
                        message: "Failed to stat local file".to_string(),
                        path: path.clone(),
                        source: e,
                    }
                }
            })?;
            Ok(FileInfo::new(name, metadata.len()))
        }
        UriTarget::ContentResource => {
            let row = match provider.query(uri) {
                Ok(Some(row)) => row,
                Ok(None) => return Err(PlatformError::NotFound(uri.to_string())),
                // A deleted resource may surface as a security fault rather
                // than an empty result.
                Err(ProviderError::AccessDenied(_)) => {
                    return Err(PlatformError::NotFound(uri.to_string()))
                }
                Err(e) => return Err(PlatformError::Provider(e)),
            };
            let name = match row.display_name {
                Some(name) => name,
                None => uri
                    .last_segment()
                    .map(str::to_owned)
                    .ok_or_else(|| PlatformError::NotFound(uri.to_string()))?,
            };
            Ok(FileInfo::new(name, row.size))
        }
        UriTarget::Unsupported(_) => Err(PlatformError::UnresolvableScheme(uri.to_string())),
    }
}

//! Error handling for the Petrel platform layer.
//!
//! This module provides error types and utilities for error handling
//! throughout the platform layer. It defines a set of error types using
//! the `thiserror` crate for ergonomic error definition and handling.
//!
//! The main error type for this crate is [`PlatformError`], which
//! encapsulates more specific errors like [`ColorParseError`] and
//! [`ProviderError`].
//!
//! Every failure propagates immediately to the caller: the platform layer
//! performs no retries and swallows nothing.

use std::path::PathBuf;
use thiserror::Error;

use crate::content::ProviderError;
use crate::types::color::ColorParseError;

/// Core error type for the Petrel platform layer.
///
/// This enum represents all possible errors that can occur in the platform
/// layer. It is designed to be used as a common error type throughout the
/// client, often by wrapping more specific error types.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Errors related to filesystem operations, such as reading or writing a
    /// file or creating its parent directories.
    /// Includes a message, the path involved, and the source I/O error.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A base64 string could not be decoded.
    /// Wraps the decoder's error.
    #[error("Base64 Decoding Failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// A URI resolved to nothing: the resource is gone, the provider returned
    /// no row, or the platform raised a security fault for a vanished
    /// resource. Contains the display form of the URI.
    #[error("Resource Not Found: {0}")]
    NotFound(String),

    /// A URI carries a scheme the platform layer cannot resolve metadata for.
    /// This is unconditional; the caller cannot recover from it.
    /// Contains the display form of the URI.
    #[error("Could not resolve file name / size for URI: {0}")]
    UnresolvableScheme(String),

    /// A color string was malformed.
    /// Wraps a [`ColorParseError`].
    #[error("Color Parsing Failed: {0}")]
    Color(#[from] ColorParseError),

    /// A JSON value has no canonical string form (null, array, or nested
    /// object) and cannot be flattened into a string map.
    #[error("JSON value for key '{key}' of type {value_type} is not representable as a string")]
    JsonValue { key: String, value_type: &'static str },

    /// A content provider query failed for a reason other than a security
    /// fault. Wraps a [`ProviderError`].
    #[error("Content Provider Error: {0}")]
    Provider(#[from] ProviderError),

    /// Errors that occur during the initialization of the logging system.
    /// Contains a descriptive message of the failure.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error; // To use the .source() method
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_platform_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/attachment.bin");
        let io_err_source = IoError::new(ErrorKind::PermissionDenied, "Permission denied");
        let err = PlatformError::Filesystem {
            message: "Failed to read file".to_string(),
            path: path.clone(),
            source: io_err_source,
        };

        assert_eq!(
            format!("{}", err),
            format!("Filesystem Error: Failed to read file (Path: {:?})", path)
        );
        assert!(err.source().is_some());
        assert_eq!(
            err.source().unwrap().downcast_ref::<IoError>().unwrap().kind(),
            ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_platform_error_not_found_variant() {
        let err = PlatformError::NotFound("content://mail/attachment/7".to_string());
        assert_eq!(
            format!("{}", err),
            "Resource Not Found: content://mail/attachment/7"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_platform_error_unresolvable_scheme_variant() {
        let err = PlatformError::UnresolvableScheme("mailto:billing@example.com".to_string());
        assert_eq!(
            format!("{}", err),
            "Could not resolve file name / size for URI: mailto:billing@example.com"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_platform_error_color_variant_carries_source() {
        let color_err = ColorParseError::InvalidFormat("123456".to_string());
        let err = PlatformError::Color(color_err);

        assert!(format!("{}", err).starts_with("Color Parsing Failed: "));
        assert!(err.source().is_some());
        assert!(err.source().unwrap().downcast_ref::<ColorParseError>().is_some());
    }

    #[test]
    fn test_platform_error_json_value_variant() {
        let err = PlatformError::JsonValue {
            key: "attachments".to_string(),
            value_type: "array",
        };
        assert_eq!(
            format!("{}", err),
            "JSON value for key 'attachments' of type array is not representable as a string"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_platform_error_provider_variant() {
        let provider_err = ProviderError::Query("resolver unavailable".to_string());
        let err = PlatformError::from(provider_err);

        assert_eq!(
            format!("{}", err),
            "Content Provider Error: content provider query failed: resolver unavailable"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_platform_error_logging_initialization_variant() {
        let err = PlatformError::LoggingInitialization("subscriber already set".to_string());
        assert_eq!(
            format!("{}", err),
            "Logging Initialization Failed: subscriber already set"
        );
        assert!(err.source().is_none());
    }
}

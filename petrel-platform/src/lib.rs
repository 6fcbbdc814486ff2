//! # Petrel Platform Library (`petrel-platform`)
//!
//! `petrel-platform` is the platform layer of the Petrel mail and calendar
//! client. It collects the small, stateless transforms the client needs at
//! the boundary to the mobile OS: codec helpers, raw file I/O, metadata
//! resolution for file and content URIs, platform version predicates, JSON
//! flattening, and label color parsing.
//!
//! ## Purpose
//!
//! Every operation is an independently testable transform wrapping a
//! platform API or a small numeric/string computation:
//!
//! - **Error Handling**: a unified error system through the
//!   [`PlatformError`] enum and its specific error types
//!   ([`ColorParseError`], [`ProviderError`]).
//! - **Core Data Types**: [`FileInfo`], the packed-ARGB [`Color`], the
//!   [`Uri`] model with its [`UriTarget`] dispatch, and [`ApiLevel`].
//! - **Content Resolution**: [`get_file_info`] over the injectable
//!   [`ContentProvider`] capability.
//! - **Logging**: console subscriber setup on top of the `tracing` crate
//!   for the host shell; the utilities themselves log nothing.
//! - **Utility Functions**: base64 conversion and byte concatenation
//!   (`utils::encoding`), file read/write (`utils::fs`), JSON flattening
//!   (`utils::json`), and deferred-result interop (`utils::async_utils`).
//!
//! ## Concurrency
//!
//! All operations are synchronous and complete or fail atomically; callers
//! schedule them off the UI thread under their own discipline. Nothing here
//! spawns work, holds locks, or keeps state beyond a scoped file handle.
//!
//! ## Usage
//!
//! ```
//! use petrel_platform::utils::{bytes_to_base64, merge};
//! use petrel_platform::Color;
//!
//! let payload = merge(&[b"header".as_slice(), b"body".as_slice()]);
//! let encoded = bytes_to_base64(&payload);
//! assert!(!encoded.is_empty());
//!
//! let label = Color::from_hex("#1A2").unwrap();
//! assert_eq!(label.argb(), 0xFF11_AA22);
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use content::{get_file_info, ContentProvider, ContentRow, ProviderError};
pub use error::PlatformError;
pub use logging::{init_logging, init_minimal_logging};
pub use types::{
    at_least_nougat, at_least_oreo, current_api_level, init_api_level, is_color_light, ApiLevel,
    Color, ColorParseError, FileInfo, Uri, UriTarget,
};
pub use utils::{
    base64_to_base64_url, base64_to_bytes, bytes_to_base64, ensure_dir_exists, file_to_uri,
    json_object_to_map, merge, read_file, resolved, write_file,
};

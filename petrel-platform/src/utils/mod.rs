//! General utilities for the Petrel platform layer.
//!
//! # Submodules
//!
//! - [`async_utils`]: Interop with deferred-result APIs.
//! - [`encoding`]: Base64 conversion, the base64url rewrite, and byte
//!   concatenation.
//! - [`fs`]: Raw file read/write, directory creation, and local-file URIs.
//! - [`json`]: Flattening flat JSON objects into string maps.
//!
//! The most commonly used helpers are re-exported here; the rest are
//! accessible through their submodules.

pub mod async_utils;
pub mod encoding;
pub mod fs;
pub mod json;

// Re-export key utilities for convenience

pub use async_utils::resolved;
pub use encoding::{base64_to_base64_url, base64_to_bytes, bytes_to_base64, merge};
pub use fs::{ensure_dir_exists, file_to_uri, read_file, write_file};
pub use json::json_object_to_map;

//! Core data types used throughout the Petrel platform layer.
//!
//! This module consolidates the value types the platform surface operates
//! on and re-exports them for easier access:
//!
//! - **API level**: [`ApiLevel`] and the process-wide version predicates.
//! - **Color**: the packed-ARGB [`Color`] struct and its parsing utilities.
//! - **File metadata**: the [`FileInfo`] record.
//! - **URI**: the [`Uri`] model and its [`UriTarget`] dispatch.

// Declare submodules
pub mod api_level;
pub mod color;
pub mod file_info;
pub mod uri;

// Re-export public types for easier access
pub use api_level::{at_least_nougat, at_least_oreo, current_api_level, init_api_level, ApiLevel};
pub use color::{is_color_light, Color, ColorParseError};
pub use file_info::FileInfo;
pub use uri::{Uri, UriTarget};

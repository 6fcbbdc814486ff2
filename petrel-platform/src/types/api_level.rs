//! Platform API level type and version predicates.
//!
//! The mobile shell records the OS API level once at startup via
//! [`init_api_level`]; the predicates here are pure lookups against that
//! process-wide value. Feature gates in the client compare against the two
//! fixed thresholds [`ApiLevel::NOUGAT`] and [`ApiLevel::OREO`].

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform API level.
///
/// An ordered newtype over the numeric level reported by the OS build info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApiLevel(u32);

impl ApiLevel {
    /// API level of the Nougat release (24).
    pub const NOUGAT: ApiLevel = ApiLevel(24);
    /// API level of the Oreo release (26).
    pub const OREO: ApiLevel = ApiLevel(26);

    /// Creates an `ApiLevel` from the numeric level.
    pub const fn new(level: u32) -> Self {
        ApiLevel(level)
    }

    /// Returns the numeric level.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` if this level is at or above `other`.
    pub fn at_least(self, other: ApiLevel) -> bool {
        self >= other
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The API level recorded by the shell at startup.
static CURRENT_API_LEVEL: OnceCell<ApiLevel> = OnceCell::new();

/// Records the platform API level for the lifetime of the process.
///
/// Intended to be called once during shell bootstrap, before any version
/// predicate is consulted. The first recorded value wins; later calls are
/// ignored.
pub fn init_api_level(level: ApiLevel) {
    let _ = CURRENT_API_LEVEL.set(level);
}

/// Returns the recorded platform API level, if one was recorded.
pub fn current_api_level() -> Option<ApiLevel> {
    CURRENT_API_LEVEL.get().copied()
}

/// Returns `true` if the platform is at Nougat (API 24) or newer.
///
/// Returns `false` when no API level was recorded: an unknown platform
/// offers no newer-API guarantees.
pub fn at_least_nougat() -> bool {
    current_api_level().map_or(false, |level| level.at_least(ApiLevel::NOUGAT))
}

/// Returns `true` if the platform is at Oreo (API 26) or newer.
///
/// Returns `false` when no API level was recorded.
pub fn at_least_oreo() -> bool {
    current_api_level().map_or(false, |level| level.at_least(ApiLevel::OREO))
}

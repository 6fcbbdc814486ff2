//! Logging setup for the Petrel platform layer.
//!
//! Built on the `tracing` ecosystem. The platform utilities themselves emit
//! nothing (failures propagate as errors instead of log lines); this module
//! only gives the host shell its console subscriber.

use std::io::stderr;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::PlatformError;

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests and early startup before the shell decides on a log
/// level. Filters based on the `RUST_LOG` environment variable, defaulting
/// to "info" when it is unset or invalid. Errors (e.g. a subscriber is
/// already set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Initializes the global logging system at the given level.
///
/// `RUST_LOG`, when set, overrides `level`. Output goes to `stderr`, with
/// ANSI colors only when `stderr` is a TTY.
///
/// # Errors
///
/// Returns [`PlatformError::LoggingInitialization`] if `level` is not one
/// of `trace`, `debug`, `info`, `warn`, `error`, or if a global subscriber
/// is already set.
pub fn init_logging(level: &str) -> Result<(), PlatformError> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            return Err(PlatformError::LoggingInitialization(format!(
                "Invalid log level: {}",
                other
            )))
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|e| PlatformError::LoggingInitialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_rejected_before_touching_the_subscriber() {
        match init_logging("verbose") {
            Err(PlatformError::LoggingInitialization(msg)) => {
                assert_eq!(msg, "Invalid log level: verbose");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn minimal_logging_init_is_safe_to_repeat() {
        init_minimal_logging();
        init_minimal_logging();
    }
}

//! Asynchronous interop helpers.

use std::future::{ready, Ready};

/// Wraps a value in an already-completed future.
///
/// For handing a synchronously computed result to APIs that expect a
/// deferred value. Performs no scheduling of its own.
///
/// # Examples
///
/// ```
/// use petrel_platform::utils::async_utils::resolved;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(resolved(42).await, 42);
/// # }
/// ```
pub fn resolved<T>(value: T) -> Ready<T> {
    ready(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolved_yields_the_value_immediately() {
        assert_eq!(resolved(42).await, 42);
        assert_eq!(resolved("done".to_string()).await, "done");
    }
}

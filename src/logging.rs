//! Logging setup for test binaries.
//!
//! Assertions and reporters emit `tracing` events (`debug` for each failed assertion, `error` for each failure a
//! [`TestContext`](crate::TestContext) collects). Nothing is printed unless a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber that writes through libtest's output capture.
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`. Calling this more than once (or after another
/// subscriber was installed) is harmless.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

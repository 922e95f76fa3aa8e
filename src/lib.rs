#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! testman: assertion helpers that report instead of panic
//!
//! Every assertion takes a [`Reporter`] and the value(s) to check, returns `true` on success, and on failure
//! records a human-readable message through the reporter. Nothing here panics or stops the test: the caller
//! (or the reporter) decides what a failure means.
//!
//! ```rust
//! use testman::assert;
//! use testman::reporter::Recorder;
//!
//! let t = Recorder::new();
//! assert!(assert::equal(&t, 1, 1));
//! assert!(!assert::contains(&t, "some string", "hello"));
//! assert_eq!(t.output(), r#"expected "some string" to contain "hello""#);
//! ```
//!
//! ## Panic Policy
//!
//! - **Library code**: never panics on assertion failure and enforces `#![deny(clippy::unwrap_used)]`.
//!   The single deliberate panic is [`TestContext::finish`](reporter::TestContext::finish) (and its drop
//!   guard), which exists to fail a `#[test]` function.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod assert;
pub mod error_value;
pub mod logging;
pub mod prelude;
pub mod reporter;

pub use error_value::ErrorValue;
pub use reporter::{ContextConfig, Failure, Recorder, TestContext, TestFailure};
pub use testman_core::{Debugged, Reporter};

//! Reporters that plug assertions into Rust tests.
//!
//! Assertions only need something implementing [`Reporter`]. Two are bundled:
//!
//! - [`Recorder`]: buffers every message in memory. Use it to test assertions themselves, or anywhere the
//!   caller wants to inspect failures instead of failing a test.
//! - [`TestContext`]: a per-test context with "mark failed and continue" semantics. Every failure is collected
//!   with its call site; the test fails once, at the end, listing all of them.
//!
//! Both are `Send + Sync`, so one handle may be shared across threads.

mod config;
mod context;
mod recorder;

pub use config::ContextConfig;
pub use context::{Failure, TestContext, TestFailure};
pub use recorder::Recorder;
pub use testman_core::Reporter;

//! Per-test reporter with "mark failed and continue" semantics.

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use testman_core::Reporter;
use thiserror::Error;

use super::config::ContextConfig;

/// One failed assertion and where it was called from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub location: &'static Location<'static>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.location.file(), self.location.line(), self.message)
    }
}

/// Every failure collected by a [`TestContext`], surfaced when the test ends.
#[derive(Debug, Clone, Error)]
#[error("{}", report(.name, .failures, .show_location))]
pub struct TestFailure {
    pub name: String,
    pub failures: Vec<Failure>,
    show_location: bool,
}

fn report(name: &str, failures: &[Failure], show_location: &bool) -> String {
    let mut out = format!("test `{name}` failed with {} failed assertion(s):", failures.len());
    for failure in failures {
        out.push_str("\n    ");
        if *show_location {
            out.push_str(&failure.to_string());
        } else {
            out.push_str(&failure.message);
        }
    }
    out
}

/// A reporter scoped to one test.
///
/// Failed assertions are collected rather than aborting the test, so a single run shows every broken
/// expectation. End the test with [`check`](TestContext::check) (returning a `Result`, usable as the return
/// value of a `#[test]` function) or [`finish`](TestContext::finish) (panicking). A context that still holds
/// failures when dropped panics as well, unless [`ContextConfig::panic_on_drop`] is off.
///
/// ```rust,should_panic
/// use testman::{assert, TestContext};
///
/// let t = TestContext::new("arithmetic");
/// assert::equal(&t, 2 + 2, 5);
/// assert::is_true(&t, 1 > 2);
/// t.finish(); // panics, listing both failures
/// ```
#[derive(Debug)]
pub struct TestContext {
    name: String,
    config: ContextConfig,
    failures: Mutex<Vec<Failure>>,
    helper_calls: AtomicUsize,
}

impl TestContext {
    /// Create a context with the default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ContextConfig::default())
    }

    /// Create a context with an explicit configuration.
    pub fn with_config(name: impl Into<String>, config: ContextConfig) -> Self {
        Self {
            name: name.into(),
            config,
            failures: Mutex::new(Vec::new()),
            helper_calls: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Whether any assertion has failed so far.
    pub fn failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    /// Snapshot of the failures recorded so far.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().clone()
    }

    /// Number of assertion calls that marked a helper frame.
    pub fn helper_calls(&self) -> usize {
        self.helper_calls.load(Ordering::Relaxed)
    }

    /// End the test, returning every recorded failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TestFailure`] if at least one assertion failed.
    pub fn check(mut self) -> Result<(), TestFailure> {
        match self.take_failure() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// End the test, panicking if any assertion failed.
    ///
    /// # Panics
    ///
    /// Panics with the full failure report if at least one assertion failed.
    #[track_caller]
    pub fn finish(self) {
        if let Err(failure) = self.check() {
            panic!("{failure}");
        }
    }

    /// Drain the recorded failures, leaving the context empty so `Drop` has nothing left to enforce.
    fn take_failure(&mut self) -> Option<TestFailure> {
        let failures = std::mem::take(self.failures.get_mut());
        if failures.is_empty() {
            return None;
        }
        Some(TestFailure {
            name: self.name.clone(),
            failures,
            show_location: self.config.show_location,
        })
    }

    #[track_caller]
    fn push(&self, message: String) {
        let location = Location::caller();
        if self.config.log_failures {
            tracing::error!(test = %self.name, location = %location, "{message}");
        }
        self.failures.lock().push(Failure { message, location });
    }
}

impl Reporter for TestContext {
    #[track_caller]
    fn mark_helper_frame(&self) {
        self.helper_calls.fetch_add(1, Ordering::Relaxed);
    }

    #[track_caller]
    fn record_error(&self, message: &str) {
        self.push(message.to_string());
    }

    #[track_caller]
    fn record_formatted_error(&self, args: fmt::Arguments<'_>) {
        self.push(args.to_string());
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if !self.config.panic_on_drop || thread::panicking() {
            return;
        }
        if let Some(failure) = self.take_failure() {
            panic!("{failure}");
        }
    }
}

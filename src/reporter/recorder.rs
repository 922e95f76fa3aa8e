//! In-memory reporter.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use testman_core::Reporter;

/// Reporter that keeps every recorded message in memory.
///
/// [`output`](Recorder::output) concatenates the messages in order, the same as writing each one into a single
/// buffer; [`messages`](Recorder::messages) keeps them apart.
#[derive(Debug, Default)]
pub struct Recorder {
    messages: Mutex<Vec<String>>,
    helper_calls: AtomicUsize,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, concatenated.
    pub fn output(&self) -> String {
        self.messages.lock().concat()
    }

    /// All recorded messages, one entry per failure.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Number of times an assertion marked a helper frame.
    pub fn helper_calls(&self) -> usize {
        self.helper_calls.load(Ordering::Relaxed)
    }

    /// Whether anything has been recorded.
    pub fn failed(&self) -> bool {
        !self.messages.lock().is_empty()
    }

    /// Forget all messages and helper marks.
    pub fn reset(&self) {
        self.messages.lock().clear();
        self.helper_calls.store(0, Ordering::Relaxed);
    }

    fn push(&self, message: String) {
        tracing::trace!(%message, "recorded failure");
        self.messages.lock().push(message);
    }
}

impl Reporter for Recorder {
    fn mark_helper_frame(&self) {
        self.helper_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn record_error(&self, message: &str) {
        self.push(message.to_string());
    }

    fn record_formatted_error(&self, args: fmt::Arguments<'_>) {
        self.push(args.to_string());
    }
}

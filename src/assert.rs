//! Assertion functions.
//!
//! Each assertion takes a [`Reporter`] and the value(s) under test, returns `true` if the check holds, and
//! otherwise records one failure message through the reporter and returns `false`. Assertions never panic and
//! keep no state between calls.
//!
//! All assertions are `#[track_caller]`: a reporter that records [`std::panic::Location::caller`] sees the line
//! of the test that called the assertion, not a line in this module.
//!
//! | Assertion | Passes when | Failure message |
//! |---|---|---|
//! | [`is_true`] | `condition` | `condition expected to be true` |
//! | [`equal`] | `got == want` | `got <got> want <want>` |
//! | [`deep_equal`] | structurally equal | `got <got> want <want>` |
//! | [`contains`] | `substring` occurs in `text` | `expected "<text>" to contain "<substring>"` |
//! | [`regex`] | `pattern` matches `text` | `"<text>" didn't match regexp "<pattern>"` |
//! | [`nil`] | `got` is `None` | `got <got>, want nil` |
//! | [`not_nil`] | `got` is not `None` | `got nil, want not nil` |
//! | [`error`] | an error is present | `got nil, want error` |
//! | [`no_error`] | no error is present | `got error "<message>", want nil` |
//!
//! [`equal`], [`deep_equal`], [`nil`] and [`not_nil`] capture their operands through `serde`, so the operand type
//! must be `Serialize`. Wrap anything else in [`Debugged`](testman_core::Debugged), which captures its `Debug`
//! text. [`error`] and [`no_error`] only need a `Display` error and take `io::Error` and friends directly.

use serde::Serialize;
use testman_core::{Reporter, quote, render};

use crate::error_value::ErrorValue;

/// Assert that `condition` is true.
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(t: &R, condition: bool) -> bool {
    t.mark_helper_frame();

    if !condition {
        tracing::debug!(assertion = "is_true", "assertion failed");
        t.record_error("condition expected to be true");
        return false;
    }

    true
}

/// Assert that `got == want`.
///
/// Both values are rendered with default formatting on failure, so `T` must also be `Serialize`. For a type
/// that is only `PartialEq + Debug`, compare `Debugged(got)` with `Debugged(want)`.
#[track_caller]
pub fn equal<R, T>(t: &R, got: T, want: T) -> bool
where
    R: Reporter + ?Sized,
    T: PartialEq + Serialize,
{
    t.mark_helper_frame();

    if got != want {
        tracing::debug!(assertion = "equal", "assertion failed");
        t.record_formatted_error(format_args!("got {} want {}", render(&got), render(&want)));
        return false;
    }

    true
}

/// Assert that `got` and `want` are structurally equal.
///
/// Unlike [`equal`], `T` needs no `PartialEq`: both values are captured through `serde` and compared
/// field-by-field and element-by-element. Maps compare regardless of iteration order; `NaN` never equals
/// itself. A value whose `Serialize` implementation fails never compares equal.
///
/// Sets compare in iteration order: two equal `HashSet`s usually come out in different orders and compare
/// unequal. Use `BTreeSet` here, or [`equal`] for `HashSet`.
///
/// ```rust
/// use testman::{assert, Recorder};
///
/// let t = Recorder::new();
/// assert!(!assert::deep_equal(&t, vec![1, 2], vec![2, 2]));
/// assert_eq!(t.output(), "got [1 2] want [2 2]");
/// ```
#[track_caller]
pub fn deep_equal<R, T>(t: &R, got: T, want: T) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize,
{
    t.mark_helper_frame();

    if !testman_core::deep_equal(&got, &want) {
        tracing::debug!(assertion = "deep_equal", "assertion failed");
        t.record_formatted_error(format_args!("got {} want {}", render(&got), render(&want)));
        return false;
    }

    true
}

/// Assert that `substring` occurs literally somewhere in `text`.
#[track_caller]
pub fn contains<R: Reporter + ?Sized>(t: &R, text: &str, substring: &str) -> bool {
    t.mark_helper_frame();

    if !text.contains(substring) {
        tracing::debug!(assertion = "contains", "assertion failed");
        t.record_formatted_error(format_args!("expected {} to contain {}", quote(text), quote(substring)));
        return false;
    }

    true
}

/// Assert that the regular expression `pattern` matches somewhere in `text`.
///
/// The match is unanchored unless the pattern anchors itself. A pattern that fails to compile fails the
/// assertion; the message carries the `regex` crate's own diagnostic verbatim.
#[track_caller]
pub fn regex<R: Reporter + ?Sized>(t: &R, text: &str, pattern: &str) -> bool {
    t.mark_helper_frame();

    let compiled = match ::regex::Regex::new(pattern) {
        Ok(compiled) => compiled,
        Err(err) => {
            tracing::debug!(assertion = "regex", %pattern, "pattern failed to compile");
            t.record_formatted_error(format_args!("regexp \"{pattern}\" didn't compile: {err}"));
            return false;
        }
    };

    if !compiled.is_match(text) {
        tracing::debug!(assertion = "regex", "assertion failed");
        t.record_formatted_error(format_args!("{} didn't match regexp \"{}\"", quote(text), pattern));
        return false;
    }

    true
}

/// Assert that `got` is nil, i.e. `None` of any `Option` type.
///
/// Structurally empty values (unit, empty structs, empty collections) are *not* nil, and neither is
/// `Some(None)`. For an `Option` of a type that is not `Serialize`, such as `Option<io::Error>`, pass
/// `got.map(Debugged)`; use [`no_error`] when the value is an error.
#[track_caller]
pub fn nil<R, T>(t: &R, got: T) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize,
{
    t.mark_helper_frame();

    if !testman_core::is_nil(&got) {
        tracing::debug!(assertion = "nil", "assertion failed");
        t.record_formatted_error(format_args!("got {}, want nil", render(&got)));
        return false;
    }

    true
}

/// Assert that `got` is not nil.
///
/// Takes the same operands as [`nil`].
#[track_caller]
pub fn not_nil<R, T>(t: &R, got: T) -> bool
where
    R: Reporter + ?Sized,
    T: Serialize,
{
    t.mark_helper_frame();

    if testman_core::is_nil(&got) {
        tracing::debug!(assertion = "not_nil", "assertion failed");
        t.record_error("got nil, want not nil");
        return false;
    }

    true
}

/// Assert that `err` carries an error, whatever its message.
#[track_caller]
pub fn error<R, E>(t: &R, err: E) -> bool
where
    R: Reporter + ?Sized,
    E: ErrorValue,
{
    t.mark_helper_frame();

    if !err.is_error() {
        tracing::debug!(assertion = "error", "assertion failed");
        t.record_error("got nil, want error");
        return false;
    }

    true
}

/// Assert that `err` carries no error.
#[track_caller]
pub fn no_error<R, E>(t: &R, err: E) -> bool
where
    R: Reporter + ?Sized,
    E: ErrorValue,
{
    t.mark_helper_frame();

    if let Some(message) = err.error_message() {
        tracing::debug!(assertion = "no_error", error = %message, "assertion failed");
        t.record_formatted_error(format_args!("got error {}, want nil", quote(&message)));
        return false;
    }

    true
}

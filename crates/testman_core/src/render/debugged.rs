//! Serialize adapter for values that only implement `Debug`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Wrap a `Debug` value so it can be captured, rendered and compared.
///
/// The wrapped value serializes as a string holding its `Debug` text, so it renders as that text and two
/// wrapped values are deep-equal when their `Debug` output is identical. Wrap the payload, not the `Option`,
/// to keep `None` nil.
///
/// ## Examples
/// ```
/// use std::io;
/// use testman_core::{Debugged, is_nil, render};
///
/// let missing: Option<io::Error> = None;
/// assert!(is_nil(&missing.map(Debugged)));
///
/// let err = io::Error::new(io::ErrorKind::NotFound, "gone");
/// assert_eq!(render(&Debugged(err.kind())), "NotFound");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Debugged<T>(pub T);

impl<T: fmt::Debug> fmt::Debug for Debugged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Debug> Serialize for Debugged<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:?}", self.0))
    }
}

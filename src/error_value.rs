//! Read "an error, or nothing" out of the values test code usually holds.

use std::fmt::Display;

/// A value that either carries an error or carries none.
///
/// Implemented for `Option<E>` (`None` means no error) and `Result<T, E>` (`Ok` means no error), where the error
/// type only has to be [`Display`]: that covers `std::io::Error`, `Box<dyn Error>`, `thiserror` enums and
/// `anyhow::Error` alike.
pub trait ErrorValue {
    /// Return the error's message if an error is present.
    fn error_message(&self) -> Option<String>;

    /// Check whether an error is present.
    fn is_error(&self) -> bool {
        self.error_message().is_some()
    }
}

impl<E: Display> ErrorValue for Option<E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().map(ToString::to_string)
    }

    fn is_error(&self) -> bool {
        self.is_some()
    }
}

impl<T, E: Display> ErrorValue for Result<T, E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().err().map(ToString::to_string)
    }

    fn is_error(&self) -> bool {
        self.is_err()
    }
}

impl<V: ErrorValue + ?Sized> ErrorValue for &V {
    fn error_message(&self) -> Option<String> {
        (**self).error_message()
    }

    fn is_error(&self) -> bool {
        (**self).is_error()
    }
}

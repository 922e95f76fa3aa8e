//! The reporter capability consumed by assertions.
//!
//! Any test-execution context that wants to receive assertion failures implements [`Reporter`]. The
//! assertions only ever borrow the reporter for the duration of one call.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Receive failure output and call-site attribution from assertions.
///
/// All methods take `&self`: implementations that buffer messages use interior mutability, which lets a single
/// handle be shared by many assertions (and by many threads, if the implementation is `Sync`).
///
/// Every method is `#[track_caller]`, so an implementation can call [`std::panic::Location::caller`] to find
/// the line in the test that invoked the assertion.
pub trait Reporter {
    /// Mark the calling frame as a test helper.
    ///
    /// Purely informational: it affects how failures are attributed, never whether an assertion passes.
    #[track_caller]
    fn mark_helper_frame(&self);

    /// Record a failure message verbatim.
    #[track_caller]
    fn record_error(&self, message: &str);

    /// Record a failure message built from a format template and its arguments.
    #[track_caller]
    fn record_formatted_error(&self, args: fmt::Arguments<'_>);
}

macro_rules! forward_reporter {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<R: Reporter + ?Sized> Reporter for $ptr {
                #[track_caller]
                fn mark_helper_frame(&self) {
                    (**self).mark_helper_frame();
                }

                #[track_caller]
                fn record_error(&self, message: &str) {
                    (**self).record_error(message);
                }

                #[track_caller]
                fn record_formatted_error(&self, args: fmt::Arguments<'_>) {
                    (**self).record_formatted_error(args);
                }
            }
        )*
    };
}

forward_reporter!(&R, &mut R, Box<R>, Rc<R>, Arc<R>);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Lines {
        helpers: RefCell<usize>,
        lines: RefCell<Vec<String>>,
    }

    impl Reporter for Lines {
        fn mark_helper_frame(&self) {
            *self.helpers.borrow_mut() += 1;
        }

        fn record_error(&self, message: &str) {
            self.lines.borrow_mut().push(message.to_string());
        }

        fn record_formatted_error(&self, args: fmt::Arguments<'_>) {
            self.lines.borrow_mut().push(args.to_string());
        }
    }

    fn report_through<R: Reporter + ?Sized>(reporter: &R) {
        reporter.mark_helper_frame();
        reporter.record_error("plain");
        reporter.record_formatted_error(format_args!("got {} want {}", 1, 2));
    }

    #[test]
    fn test_forwarding_through_smart_pointers() {
        let shared = Rc::new(Lines::default());
        report_through(&shared);
        report_through(&Box::new(&*shared));

        assert_eq!(*shared.helpers.borrow(), 2);
        assert_eq!(
            *shared.lines.borrow(),
            vec!["plain", "got 1 want 2", "plain", "got 1 want 2"]
        );
    }

    #[test]
    fn test_trait_object_reporter() {
        let lines = Lines::default();
        let dynamic: &dyn Reporter = &lines;
        report_through(dynamic);
        assert_eq!(lines.lines.borrow().len(), 2);
    }
}

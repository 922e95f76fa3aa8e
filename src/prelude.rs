//! Convenience re-exports for test modules.
//!
//! ```rust
//! use testman::prelude::*;
//!
//! let t = Recorder::new();
//! assert!(assert::is_true(&t, true));
//! ```

pub use crate::assert;
pub use crate::error_value::ErrorValue;
pub use crate::reporter::{ContextConfig, Recorder, TestContext, TestFailure};
pub use testman_core::{Debugged, Reporter};

//! Errors raised while capturing a value for rendering or comparison.
//!
//! These never reach a test author as a panic: assertions turn them into failure messages.

use std::fmt::Display;

use thiserror::Error;

/// Errors produced by the [`Value`](crate::Value) serializer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A `Serialize` implementation reported its own error.
    #[error("{0}")]
    Custom(String),

    /// A map value was serialized without a preceding key.
    #[error("map value serialized without a key")]
    KeyMissing,
}

impl serde::ser::Error for RenderError {
    fn custom<T: Display>(msg: T) -> Self {
        RenderError::Custom(msg.to_string())
    }
}

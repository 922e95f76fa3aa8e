#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Provide the reporter capability and the canonical value formatting shared by every testman assertion.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - the [`Reporter`] trait: the only contract a host test context must satisfy,
//! - [`render`]: Go-style `%v` rendering and structural comparison of any `serde::Serialize` value,
//! - [`quote`]: double-quoting with escapes for string operands in failure messages.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no assertion logic.
//! - Failure message wording lives next to the assertions (`testman::assert`); the pieces those messages are
//!   built from live here so every assertion renders values identically.

pub mod errors;
pub mod quote;
pub mod render;
pub mod reporter;

pub use errors::RenderError;
pub use quote::quote;
pub use render::{Debugged, Value, deep_equal, is_nil, render};
pub use reporter::Reporter;

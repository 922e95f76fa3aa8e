//! Render and compare arbitrary values through a type-erased [`Value`] tree.
//!
//! Any `serde::Serialize` value can be captured into a [`Value`]. The tree is then used for three things:
//! - default rendering in failure messages (Go `%v` conventions, see [`Value`]'s `Display`),
//! - structural equality ([`deep_equal`]),
//! - nilness ([`is_nil`]).
//!
//! ## Notes
//! - `Option::None` is the only nil value. Unit, unit structs, empty structs, empty collections and empty
//!   strings are all non-nil.
//! - `Some(v)` renders exactly like `v`, but stays distinct from `v` for equality and nilness, so `Some(None)`
//!   is present while `None` is nil.
//! - Sets are captured in iteration order, so two equal `HashSet`s usually compare unequal. Compare
//!   `BTreeSet`s instead.
//! - Types that are not `Serialize` can be wrapped in [`Debugged`] to capture their `Debug` text.

mod capture;
mod debugged;
mod float;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::errors::RenderError;

pub use debugged::Debugged;
pub use float::format_float;

/// How an enum variant carries its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStyle {
    Unit,
    Tuple,
    Struct,
}

/// A structural snapshot of a serialized value.
#[derive(Debug, Clone)]
pub enum Value {
    /// `Option::None`.
    Nil,
    /// `Option::Some`, kept so `Some(None)` is not mistaken for `None`.
    Some(Box<Value>),
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    /// Sequences, fixed-size arrays and tuples.
    Seq(Vec<Value>),
    /// Map entries in serialization order.
    Map(Vec<(Value, Value)>),
    /// Unit (named `()`) and structs of every shape.
    Record { name: &'static str, fields: Vec<Value> },
    Variant {
        enum_name: &'static str,
        variant: &'static str,
        style: VariantStyle,
        fields: Vec<Value>,
    },
}

impl Value {
    /// Capture `value` by running it through the [`Value`] serializer.
    ///
    /// ## Errors
    /// - Whatever error the value's `Serialize` implementation raises, as [`RenderError::Custom`].
    pub fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Value, RenderError> {
        value.serialize(capture::ValueSerializer)
    }

    /// Check whether this is the nil value.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Compare two trees structurally.
    ///
    /// ## Notes
    /// - Floats compare with IEEE semantics, so `NaN` is never equal to itself.
    /// - Maps compare as unordered sets of entries.
    /// - Records and variants must agree on type name as well as on fields.
    pub fn structurally_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Some(a), Value::Some(b)) => a.structurally_eq(b),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => all_eq(a, b),
            (Value::Map(a), Value::Map(b)) => map_eq(a, b),
            (Value::Record { name: na, fields: fa }, Value::Record { name: nb, fields: fb }) => {
                na == nb && all_eq(fa, fb)
            }
            (
                Value::Variant {
                    enum_name: ea,
                    variant: va,
                    style: sa,
                    fields: fa,
                },
                Value::Variant {
                    enum_name: eb,
                    variant: vb,
                    style: sb,
                    fields: fb,
                },
            ) => ea == eb && va == vb && sa == sb && all_eq(fa, fb),
            _ => false,
        }
    }
}

fn all_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structurally_eq(y))
}

fn map_eq(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.iter()
                .find(|(other_key, _)| other_key.structurally_eq(key))
                .is_some_and(|(_, other_value)| other_value.structurally_eq(value))
        })
}

/// Order map keys for rendering: numbers numerically, strings lexically, everything else by rendered text.
fn key_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Some(x), _) => key_order(x, b),
        (_, Value::Some(y)) => key_order(a, y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Uint(x), Value::Uint(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        (Value::Char(x), Value::Char(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn write_spaced(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Some(inner) => write!(f, "{inner}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Bytes(bytes) => {
                f.write_str("[")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte}")?;
                }
                f.write_str("]")
            }
            Value::Seq(items) => {
                f.write_str("[")?;
                write_spaced(f, items)?;
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut sorted: Vec<&(Value, Value)> = entries.iter().collect();
                sorted.sort_by(|(a, _), (b, _)| key_order(a, b));
                f.write_str("map[")?;
                for (i, (key, value)) in sorted.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
            Value::Record { fields, .. } => {
                f.write_str("{")?;
                write_spaced(f, fields)?;
                f.write_str("}")
            }
            Value::Variant {
                variant, style, fields, ..
            } => match style {
                VariantStyle::Unit => f.write_str(variant),
                VariantStyle::Tuple => {
                    write!(f, "{variant}(")?;
                    write_spaced(f, fields)?;
                    f.write_str(")")
                }
                VariantStyle::Struct => {
                    write!(f, "{variant}{{")?;
                    write_spaced(f, fields)?;
                    f.write_str("}")
                }
            },
        }
    }
}

// =====================================================================
// Entry points used by assertions
// =====================================================================

/// Render `value` with default (`%v`-style) formatting.
///
/// ## Returns
/// - (`String`): the rendered value, or `%!v(ERROR=<detail>)` if the value could not be captured.
///
/// ## Examples
/// ```rust
/// use testman_core::render;
/// assert_eq!(render(&vec![1, 2]), "[1 2]");
/// assert_eq!(render("text"), "text");
/// assert_eq!(render(&None::<i32>), "<nil>");
/// ```
pub fn render<T: Serialize + ?Sized>(value: &T) -> String {
    match Value::capture(value) {
        Ok(captured) => captured.to_string(),
        Err(err) => format!("%!v(ERROR={err})"),
    }
}

/// Check two values for structural equality.
///
/// ## Returns
/// - (`bool`): `true` only if both values capture successfully and the trees are structurally equal.
pub fn deep_equal<T: Serialize + ?Sized>(got: &T, want: &T) -> bool {
    match (Value::capture(got), Value::capture(want)) {
        (Ok(got), Ok(want)) => got.structurally_eq(&want),
        _ => false,
    }
}

/// Check whether `value` is nil (`Option::None` at any type).
pub fn is_nil<T: Serialize + ?Sized>(value: &T) -> bool {
    Value::capture(value).is_ok_and(|captured| captured.is_nil())
}

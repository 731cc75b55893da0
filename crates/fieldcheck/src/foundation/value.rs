//! Normalised value snapshots handed to checks.

use std::fmt;

/// A read-only view of a field value, normalised into a small closed set of
/// variants so checks can pattern-match instead of inspecting concrete types.
///
/// Optional wrappers and smart pointers are unwrapped before a snapshot is
/// taken: `Some(5u8)` becomes `Integer(5)` and `None` becomes `Absent`.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{Inspect, Value};
///
/// assert_eq!("hi".snapshot(), Value::Str("hi"));
/// assert_eq!(7u16.snapshot(), Value::Integer(7));
/// assert_eq!(None::<String>.snapshot(), Value::Absent);
/// assert_eq!(vec![1, 2, 3].snapshot(), Value::List(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text.
    Str(&'a str),
    /// Any signed or unsigned integer.
    Integer(i128),
    /// Any floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// An absent optional value.
    Absent,
    /// An ordered collection with the given number of elements.
    List(usize),
    /// A nested record.
    Record,
}

impl<'a> Value<'a> {
    /// Returns the text if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is an integer or a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(i) => Some(i as f64),
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Returns true if this value is numeric.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Short name of the variant, used in error parameters and logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Absent => "absent",
            Value::List(_) => "list",
            Value::Record => "record",
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Absent => f.write_str("<absent>"),
            Value::List(len) => write!(f, "<list of {len}>"),
            Value::Record => f.write_str("<record>"),
        }
    }
}

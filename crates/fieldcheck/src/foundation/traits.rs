//! Shape traits the traversal engine walks.
//!
//! The engine never inspects concrete types. Every value it visits answers
//! three questions through [`Inspect`]: what shape it has, what it looks
//! like to a check, and whether it is the zero value of its type. Records
//! additionally list their fields through [`Describe`].
//!
//! Implementations for the standard scalar, wrapper, and collection types
//! live in [`impls`](super::impls); records get theirs from
//! `#[derive(Describe)]` or by hand.

use std::fmt;

use super::value::Value;

// ============================================================================
// INSPECT
// ============================================================================

/// A value the engine can walk.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{Inspect, Shape, Value};
///
/// struct Celsius(f64);
///
/// impl Inspect for Celsius {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Scalar
///     }
///
///     fn snapshot(&self) -> Value<'_> {
///         Value::Float(self.0)
///     }
///
///     fn is_zero(&self) -> bool {
///         self.0 == 0.0
///     }
/// }
///
/// assert_eq!(Celsius(21.5).snapshot(), Value::Float(21.5));
/// ```
pub trait Inspect {
    /// How the engine should recurse into this value.
    fn shape(&self) -> Shape<'_>;

    /// The normalised view handed to checks.
    fn snapshot(&self) -> Value<'_>;

    /// Returns true for the zero value of the type: absent, empty,
    /// numeric zero, `false`, or a record whose fields are all zero.
    fn is_zero(&self) -> bool;
}

// ============================================================================
// SHAPE
// ============================================================================

/// The recursion shape of a value.
pub enum Shape<'a> {
    /// A value composed of named fields.
    Record(&'a dyn Describe),
    /// A value that may be absent. Present values are walked with the
    /// current path unchanged.
    Optional(Option<&'a dyn Inspect>),
    /// An ordered collection; element `i` is walked under `path.i`.
    Sequence(Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>),
    /// Terminal value.
    Scalar,
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Record(_) => f.write_str("Record"),
            Shape::Optional(inner) => f
                .debug_tuple("Optional")
                .field(&inner.map(|_| "<value>"))
                .finish(),
            Shape::Sequence(_) => f.write_str("Sequence"),
            Shape::Scalar => f.write_str("Scalar"),
        }
    }
}

// ============================================================================
// DESCRIBE
// ============================================================================

/// A record: lists its fields in declaration order.
///
/// Usually derived:
///
/// ```
/// use fieldcheck::Describe;
///
/// #[derive(Describe)]
/// struct Login {
///     #[check(valid = "minLength 1, maxLength 200")]
///     name: String,
///     #[check(valid = "password", serial = "pass")]
///     password: String,
/// }
/// ```
pub trait Describe {
    /// Returns one descriptor per field, in declaration order.
    fn describe(&self) -> Vec<FieldDescriptor<'_>>;
}

/// Returns true if every described field of `record` is zero.
///
/// Derived `Inspect` impls use this for [`Inspect::is_zero`].
pub fn record_is_zero(record: &dyn Describe) -> bool {
    record.describe().iter().all(|field| field.value().is_zero())
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field of a record together with the metadata declared on it.
///
/// All metadata is kept as raw text; the engine interprets it:
///
/// - `rules`: comma-separated check invocations, e.g. `"minLength 1, password"`;
/// - `optional`: `"true"` (ASCII case-insensitive) enables the zero-value skip;
/// - `serial_name`: the alternate serialization name, possibly followed by
///   `,options`; `"-"` marks a field skipped by serialization.
#[derive(Clone, Copy)]
pub struct FieldDescriptor<'a> {
    name: &'a str,
    rules: Option<&'a str>,
    optional: Option<&'a str>,
    serial_name: Option<&'a str>,
    value: &'a dyn Inspect,
}

impl<'a> FieldDescriptor<'a> {
    /// Creates a descriptor without any metadata.
    pub fn new(name: &'a str, value: &'a dyn Inspect) -> Self {
        Self {
            name,
            rules: None,
            optional: None,
            serial_name: None,
            value,
        }
    }

    /// Attaches the rule string.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: &'a str) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Attaches the optional marker.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_optional(mut self, optional: &'a str) -> Self {
        self.optional = Some(optional);
        self
    }

    /// Attaches the alternate serialization name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_serial_name(mut self, serial_name: &'a str) -> Self {
        self.serial_name = Some(serial_name);
        self
    }

    /// The field's intrinsic name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The raw rule string, if any.
    pub fn rules(&self) -> Option<&'a str> {
        self.rules
    }

    /// The raw optional marker, if any.
    pub fn optional(&self) -> Option<&'a str> {
        self.optional
    }

    /// The raw alternate serialization name, if any.
    pub fn serial_name(&self) -> Option<&'a str> {
        self.serial_name
    }

    /// The field value.
    pub fn value(&self) -> &'a dyn Inspect {
        self.value
    }

    /// Returns true if the optional marker reads `true`.
    pub fn is_optional(&self) -> bool {
        self.optional
            .is_some_and(|marker| marker.eq_ignore_ascii_case("true"))
    }
}

impl fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .field("optional", &self.optional)
            .field("serial_name", &self.serial_name)
            .field("value", &self.value.snapshot())
            .finish()
    }
}

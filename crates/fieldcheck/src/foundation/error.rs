//! Error types for check failures
//!
//! Two layers live here:
//!
//! - [`CheckError`] is a single failure with a short machine-readable key, a
//!   human-readable message, and optional parameters.
//! - [`ErrorsMap`] is the per-call report mapping a dotted field path to the
//!   ordered list of failures recorded at that path.
//!
//! [`ArgumentError`] covers malformed check arguments and converts into a
//! `CheckError` keyed `INVALID_ARG`.
//!
//! All string fields use `Cow<'static, str>` so the well-known errors are
//! built without allocating.

use std::borrow::Cow;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// ERROR KEYS
// ============================================================================

/// Machine-readable keys carried by the errors this crate produces.
///
/// Consumers should branch on these rather than on rendered messages.
pub mod keys {
    /// A rule referenced a check name that is not registered.
    pub const NOT_DEFINED: &str = "NOT_DEFINED";
    /// The value handed to a string check is not a string.
    pub const NOT_STRING: &str = "NOT_STRING";
    /// The value handed to a numeric check is not a number.
    pub const NOT_INT: &str = "NOT_INT";
    /// The value is longer than allowed.
    pub const VAL_TO_LONG: &str = "VAL_TO_LONG";
    /// The value is shorter than required.
    pub const VAL_TO_SHORT: &str = "VAL_TO_SHORT";
    /// The value is larger than allowed.
    pub const VAL_TO_BIG: &str = "VAL_TO_BIG";
    /// The value is smaller than required.
    pub const VAL_TO_SMALL: &str = "VAL_TO_SMALL";
    /// The rule argument could not be parsed by the check.
    pub const INVALID_ARG: &str = "INVALID_ARG";
}

// ============================================================================
// CHECK ERROR
// ============================================================================

/// A single, immutable check failure.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{CheckError, keys};
///
/// let error = CheckError::too_short().with_param("min", "3");
/// assert_eq!(error.key, keys::VAL_TO_SHORT);
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckError {
    /// Short machine token, e.g. `VAL_TO_SHORT`.
    pub key: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 0-2).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl CheckError {
    /// Creates a new error with a key and message.
    pub fn new(key: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error carries the given key.
    #[must_use]
    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CheckError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl CheckError {
    /// A rule names a check that was never registered.
    pub fn not_defined() -> Self {
        Self::new(keys::NOT_DEFINED, "Check is not defined")
    }

    /// The value is not a string.
    pub fn not_string() -> Self {
        Self::new(keys::NOT_STRING, "Value is not a string")
    }

    /// The value is not numeric.
    pub fn not_int() -> Self {
        Self::new(keys::NOT_INT, "Value is not an integer")
    }

    /// The value is too long.
    pub fn too_long() -> Self {
        Self::new(keys::VAL_TO_LONG, "Value is too long")
    }

    /// The value is too short.
    pub fn too_short() -> Self {
        Self::new(keys::VAL_TO_SHORT, "Value is too short")
    }

    /// The value is too big.
    pub fn too_big() -> Self {
        Self::new(keys::VAL_TO_BIG, "Value is too big")
    }

    /// The value is too small.
    pub fn too_small() -> Self {
        Self::new(keys::VAL_TO_SMALL, "Value is too small")
    }
}

// ============================================================================
// ARGUMENT ERRORS
// ============================================================================

/// A check could not make sense of its rule argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ArgumentError {
    /// The rule carried no argument but the check needs one.
    #[error("check `{check}` requires an argument")]
    Missing { check: String },

    /// The argument is not an integer.
    #[error("argument `{argument}` of check `{check}` is not an integer: {source}")]
    NotInteger {
        check: String,
        argument: String,
        #[source]
        source: ParseIntError,
    },

    /// The argument is not a number.
    #[error("argument `{argument}` of check `{check}` is not a number: {source}")]
    NotNumber {
        check: String,
        argument: String,
        #[source]
        source: ParseFloatError,
    },
}

impl From<ArgumentError> for CheckError {
    fn from(error: ArgumentError) -> Self {
        let argument = match &error {
            ArgumentError::Missing { .. } => String::new(),
            ArgumentError::NotInteger { argument, .. } | ArgumentError::NotNumber { argument, .. } => {
                argument.clone()
            }
        };
        CheckError::new(keys::INVALID_ARG, error.to_string()).with_param("argument", argument)
    }
}

// ============================================================================
// ERRORS MAP
// ============================================================================

/// Failures recorded at one path, in rule declaration order.
pub type FieldErrors = SmallVec<[CheckError; 2]>;

/// The report produced by a single `check` call.
///
/// Keys are dot-joined paths from the root record (`address.street`,
/// `items.0.name`). Paths keep the order in which their first error was
/// recorded, which is depth-first traversal order, so iteration and
/// rendering are deterministic.
///
/// An empty map means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorsMap {
    fields: IndexMap<String, FieldErrors>,
}

impl ErrorsMap {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error at `path`. `None` is ignored.
    pub fn add_error(&mut self, path: impl Into<String>, error: impl Into<Option<CheckError>>) {
        if let Some(error) = error.into() {
            self.fields.entry(path.into()).or_default().push(error);
        }
    }

    /// Returns the errors recorded at `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[CheckError]> {
        self.fields.get(path).map(SmallVec::as_slice)
    }

    /// Returns the keys of the errors recorded at `path`, in order.
    #[must_use]
    pub fn error_keys(&self, path: &str) -> Vec<&str> {
        self.get(path)
            .map(|errors| errors.iter().map(|e| e.key.as_ref()).collect())
            .unwrap_or_default()
    }

    /// Returns true if any error was recorded at `path`.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    /// Number of paths with at least one error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no error was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of errors across every path.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        self.fields.values().map(SmallVec::len).sum()
    }

    /// Iterates paths in first-error order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(path, errors)` pairs in first-error order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CheckError])> {
        self.fields
            .iter()
            .map(|(path, errors)| (path.as_str(), errors.as_slice()))
    }

    /// Appends every error of `other`, preserving its order.
    pub fn merge(&mut self, other: ErrorsMap) {
        for (path, errors) in other.fields {
            self.fields.entry(path).or_default().extend(errors);
        }
    }

    /// Converts the report into a `Result`: `Ok(())` when empty.
    pub fn into_result(self) -> Result<(), ErrorsMap> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<'a> IntoIterator for &'a ErrorsMap {
    type Item = (&'a String, &'a FieldErrors);
    type IntoIter = indexmap::map::Iter<'a, String, FieldErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Renders one `path: msg1, msg2` line per path.
///
/// Meant for logs and debugging; machine consumers should read
/// [`CheckError::key`] instead.
impl fmt::Display for ErrorsMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, (path, errors)) in self.fields.iter().enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{path}: ")?;
            for (i, error) in errors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorsMap {}

// ============================================================================
// TESTS
// ============================================================================

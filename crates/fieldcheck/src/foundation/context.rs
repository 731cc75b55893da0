//! The read-only invocation context handed to every check.

use super::error::ArgumentError;
use super::value::Value;

/// Everything a check may look at for one rule on one field.
///
/// Checks receive `&Context` and nothing else, so they cannot mutate the
/// record being validated.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{Context, Value};
///
/// let ctx = Context::new(Value::Str("bob"), "minLength", "3", "Name", "user.Name");
/// assert_eq!(ctx.int_argument(), Ok(3));
/// assert_eq!(ctx.field_name(), "Name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context<'a> {
    value: Value<'a>,
    check_name: &'a str,
    check_argument: &'a str,
    field_name: &'a str,
    field_path: &'a str,
}

impl<'a> Context<'a> {
    /// Creates a context. `check_argument` is `""` when the rule has none.
    pub fn new(
        value: Value<'a>,
        check_name: &'a str,
        check_argument: &'a str,
        field_name: &'a str,
        field_path: &'a str,
    ) -> Self {
        Self {
            value,
            check_name,
            check_argument,
            field_name,
            field_path,
        }
    }

    /// Snapshot of the field value.
    pub fn value(&self) -> Value<'a> {
        self.value
    }

    /// Name the rule used to select the check.
    pub fn check_name(&self) -> &'a str {
        self.check_name
    }

    /// The raw rule argument, `""` if absent.
    pub fn check_argument(&self) -> &'a str {
        self.check_argument
    }

    /// Display name of the field (the last path segment).
    pub fn field_name(&self) -> &'a str {
        self.field_name
    }

    /// Full dotted path of the field.
    pub fn field_path(&self) -> &'a str {
        self.field_path
    }

    /// Returns true if the rule carried an argument.
    pub fn has_argument(&self) -> bool {
        !self.check_argument.is_empty()
    }

    /// Parses the argument as a signed integer.
    pub fn int_argument(&self) -> Result<i64, ArgumentError> {
        let argument = self.required_argument()?;
        argument
            .parse()
            .map_err(|source| ArgumentError::NotInteger {
                check: self.check_name.to_owned(),
                argument: argument.to_owned(),
                source,
            })
    }

    /// Parses the argument as a floating point number.
    pub fn float_argument(&self) -> Result<f64, ArgumentError> {
        let argument = self.required_argument()?;
        argument
            .parse()
            .map_err(|source| ArgumentError::NotNumber {
                check: self.check_name.to_owned(),
                argument: argument.to_owned(),
                source,
            })
    }

    fn required_argument(&self) -> Result<&'a str, ArgumentError> {
        if self.has_argument() {
            Ok(self.check_argument)
        } else {
            Err(ArgumentError::Missing {
                check: self.check_name.to_owned(),
            })
        }
    }
}

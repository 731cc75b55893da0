//! String length checks
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5.

use crate::foundation::{CheckError, Context, Value};

/// A password must be longer than this many chars.
pub const PASSWORD_MIN_CHARS: usize = 8;

fn string_value<'a>(ctx: &Context<'a>) -> Result<&'a str, CheckError> {
    match ctx.value() {
        Value::Str(s) => Ok(s),
        other => Err(CheckError::not_string().with_param("actual", other.kind())),
    }
}

fn length_argument(ctx: &Context<'_>) -> Result<i64, CheckError> {
    ctx.int_argument().map_err(CheckError::from)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// `minLength n`: the string has at least `n` chars.
///
/// ```
/// use fieldcheck::checks::min_length;
/// use fieldcheck::foundation::{Context, Value, keys};
///
/// let ctx = Context::new(Value::Str(""), "minLength", "1", "name", "name");
/// assert_eq!(min_length(&ctx).unwrap_err().key, keys::VAL_TO_SHORT);
/// ```
pub fn min_length(ctx: &Context<'_>) -> Result<(), CheckError> {
    let value = string_value(ctx)?;
    let min = length_argument(ctx)?;
    let actual = value.chars().count();

    if (actual as i128) < i128::from(min) {
        return Err(CheckError::too_short()
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string()));
    }
    Ok(())
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// `maxLength n`: the string has at most `n` chars.
pub fn max_length(ctx: &Context<'_>) -> Result<(), CheckError> {
    let value = string_value(ctx)?;
    let max = length_argument(ctx)?;
    let actual = value.chars().count();

    if (actual as i128) > i128::from(max) {
        return Err(CheckError::too_long()
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string()));
    }
    Ok(())
}

// ============================================================================
// PASSWORD
// ============================================================================

/// `password`: the string is longer than [`PASSWORD_MIN_CHARS`] chars.
///
/// Takes no argument; one given in the rule is ignored.
pub fn password(ctx: &Context<'_>) -> Result<(), CheckError> {
    let actual = string_value(ctx)?.chars().count();

    if actual > PASSWORD_MIN_CHARS {
        Ok(())
    } else {
        Err(CheckError::too_short()
            .with_param("min", (PASSWORD_MIN_CHARS + 1).to_string())
            .with_param("actual", actual.to_string()))
    }
}

//! Numeric bound checks
//!
//! Integers compare exactly against the integer argument. Floats are
//! truncated toward zero first, so `lowerThan 18` accepts `18.5` and
//! `higherThan -2` accepts `-2.5`. Both bounds are inclusive: `higherThan 3`
//! accepts `3`.

use std::cmp::Ordering;

use crate::foundation::{CheckError, Context, Value};

/// Orders `value` against `bound`, truncating floats toward zero. `None`
/// when the value is not numeric or is a NaN float.
fn compare(value: Value<'_>, bound: i64) -> Option<Ordering> {
    match value {
        Value::Integer(n) => Some(n.cmp(&i128::from(bound))),
        Value::Float(x) => x.trunc().partial_cmp(&(bound as f64)),
        _ => None,
    }
}

fn bounded(
    ctx: &Context<'_>,
    rejects: Ordering,
    error: fn() -> CheckError,
    param: &'static str,
) -> Result<(), CheckError> {
    let bound = ctx.int_argument()?;
    let value = ctx.value();

    if !value.is_number() {
        return Err(CheckError::not_int().with_param("actual", value.kind()));
    }

    if compare(value, bound) == Some(rejects) {
        return Err(error()
            .with_param(param, bound.to_string())
            .with_param("actual", value.to_string()));
    }
    Ok(())
}

/// `higherThan n`: the number is at least `n`.
///
/// ```
/// use fieldcheck::checks::higher_than;
/// use fieldcheck::foundation::{Context, Value, keys};
///
/// let ctx = Context::new(Value::Integer(17), "higherThan", "18", "age", "age");
/// assert_eq!(higher_than(&ctx).unwrap_err().key, keys::VAL_TO_SMALL);
/// ```
pub fn higher_than(ctx: &Context<'_>) -> Result<(), CheckError> {
    bounded(ctx, Ordering::Less, CheckError::too_small, "min")
}

/// `lowerThan n`: the number is at most `n`.
pub fn lower_than(ctx: &Context<'_>) -> Result<(), CheckError> {
    bounded(ctx, Ordering::Greater, CheckError::too_big, "max")
}

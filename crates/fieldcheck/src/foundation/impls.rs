//! `Inspect` implementations for standard library types.
//!
//! Pointers (`&T`, `Box`, `Rc`, `Arc`) delegate to the value they point
//! to, so they are walked with the current path unchanged. `Option` is the
//! only wrapper that can be absent.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use super::traits::{Inspect, Shape};
use super::value::Value;
use crate::{inspect_scalar, inspect_sequence};

// ============================================================================
// SCALARS
// ============================================================================

inspect_scalar!(int: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

inspect_scalar! {
    f32;
    snapshot(x) { Value::Float(f64::from(*x)) }
    zero(x) { *x == 0.0 }
}

inspect_scalar! {
    f64;
    snapshot(x) { Value::Float(*x) }
    zero(x) { *x == 0.0 }
}

inspect_scalar! {
    i128;
    snapshot(n) { Value::Integer(*n) }
    zero(n) { *n == 0 }
}

inspect_scalar! {
    bool;
    snapshot(b) { Value::Bool(*b) }
    zero(b) { !*b }
}

inspect_scalar! {
    str;
    snapshot(s) { Value::Str(s) }
    zero(s) { s.is_empty() }
}

inspect_scalar! {
    String;
    snapshot(s) { Value::Str(s) }
    zero(s) { s.is_empty() }
}

inspect_scalar! {
    Cow<'_, str>;
    snapshot(s) { Value::Str(s) }
    zero(s) { s.is_empty() }
}

// ============================================================================
// OPTIONAL WRAPPER
// ============================================================================

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|value| value as &dyn Inspect))
    }

    fn snapshot(&self) -> Value<'_> {
        match self {
            Some(value) => value.snapshot(),
            None => Value::Absent,
        }
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_none_or(Inspect::is_zero)
    }
}

// ============================================================================
// POINTERS
// ============================================================================

macro_rules! inspect_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn snapshot(&self) -> Value<'_> {
                    (**self).snapshot()
                }

                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }
            }
        )+
    };
}

inspect_pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn snapshot(&self) -> Value<'_> {
        (**self).snapshot()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// ============================================================================
// ORDERED COLLECTIONS
// ============================================================================

inspect_sequence!(Vec, VecDeque);

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Inspect)))
    }

    fn snapshot(&self) -> Value<'_> {
        Value::List(self.len())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }

    fn snapshot(&self) -> Value<'_> {
        Value::List(N)
    }

    fn is_zero(&self) -> bool {
        self.iter().all(Inspect::is_zero)
    }
}

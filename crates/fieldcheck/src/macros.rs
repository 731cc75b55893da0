//! Macros for implementing [`Inspect`](crate::foundation::Inspect) with
//! minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`inspect_scalar!`]: terminal types with a fixed snapshot and zero test
//! - [`inspect_sequence!`]: ordered collections that iterate by reference
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::foundation::{Inspect, Value};
//! use fieldcheck::inspect_scalar;
//!
//! pub struct Port(u16);
//!
//! inspect_scalar! {
//!     Port;
//!     snapshot(port) { Value::Integer(i128::from(port.0)) }
//!     zero(port) { port.0 == 0 }
//! }
//!
//! assert!(Port(0).is_zero());
//! assert_eq!(Port(8080).snapshot(), Value::Integer(8080));
//! ```

// ============================================================================
// SCALAR MACRO
// ============================================================================

/// Implements `Inspect` for a terminal type.
///
/// # Variants
///
/// **Explicit snapshot and zero test**:
/// ```rust,ignore
/// inspect_scalar! {
///     Port;
///     snapshot(port) { Value::Integer(i128::from(port.0)) }
///     zero(port) { port.0 == 0 }
/// }
/// ```
///
/// **Primitive integers** (snapshot `Integer`, zero is `0`):
/// ```rust,ignore
/// inspect_scalar!(int: i8, i16, u32);
/// ```
#[macro_export]
macro_rules! inspect_scalar {
    // ── Variant 1: primitive integers ─────────────────────────────────────
    (int: $($ty:ty),+ $(,)?) => {
        $(
            $crate::inspect_scalar! {
                $ty;
                snapshot(n) { $crate::foundation::Value::Integer(*n as i128) }
                zero(n) { *n == 0 }
            }
        )+
    };

    // ── Variant 2: explicit snapshot + zero ───────────────────────────────
    (
        $ty:ty;
        snapshot($snap_self:ident) $snap:block
        zero($zero_self:ident) $zero:block
    ) => {
        impl $crate::foundation::Inspect for $ty {
            fn shape(&self) -> $crate::foundation::Shape<'_> {
                $crate::foundation::Shape::Scalar
            }

            fn snapshot(&self) -> $crate::foundation::Value<'_> {
                let $snap_self = self;
                $snap
            }

            fn is_zero(&self) -> bool {
                let $zero_self = self;
                $zero
            }
        }
    };
}

// ============================================================================
// SEQUENCE MACRO
// ============================================================================

/// Implements `Inspect` for a generic collection `C<T>` whose `iter()`
/// yields `&T` in order and whose `len()` is the element count.
///
/// ```rust,ignore
/// inspect_sequence!(Vec, VecDeque);
/// ```
#[macro_export]
macro_rules! inspect_sequence {
    ($($coll:ident),+ $(,)?) => {
        $(
            impl<T: $crate::foundation::Inspect> $crate::foundation::Inspect for $coll<T> {
                fn shape(&self) -> $crate::foundation::Shape<'_> {
                    $crate::foundation::Shape::Sequence(::std::boxed::Box::new(
                        self.iter().map(|item| item as &dyn $crate::foundation::Inspect),
                    ))
                }

                fn snapshot(&self) -> $crate::foundation::Value<'_> {
                    $crate::foundation::Value::List(self.len())
                }

                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

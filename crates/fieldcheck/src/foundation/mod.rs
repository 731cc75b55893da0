//! Core types and traits
//!
//! This module holds the building blocks every other layer depends on:
//!
//! - **Errors**: `CheckError`, `ErrorsMap`, `ArgumentError`
//! - **Shape model**: `Inspect`, `Describe`, `Shape`, `FieldDescriptor`
//! - **Check input**: `Value`, `Context`
//!
//! # Architecture
//!
//! ## 1. Capabilities instead of reflection
//!
//! The engine walks any value that implements [`Inspect`]. Records add
//! [`Describe`] to list their fields together with the raw rule metadata
//! declared on them:
//!
//! ```rust,ignore
//! #[derive(Describe)]
//! struct Account {
//!     #[check(valid = "minLength 3")]
//!     name: String,
//!     address: Address, // walked recursively
//! }
//! ```
//!
//! ## 2. Closed value snapshots
//!
//! Checks never see concrete types. They match on [`Value`]:
//!
//! ```rust,ignore
//! match ctx.value() {
//!     Value::Str(s) => { /* ... */ }
//!     _ => return Err(CheckError::not_string()),
//! }
//! ```
//!
//! ## 3. Ordered reports
//!
//! Failures land in an [`ErrorsMap`] keyed by dotted path, in the order the
//! traversal met them.

pub mod context;
pub mod error;
mod impls;
pub mod traits;
pub mod value;

pub use context::Context;
pub use error::{ArgumentError, CheckError, ErrorsMap, FieldErrors, keys};
pub use traits::{Describe, FieldDescriptor, Inspect, Shape, record_is_zero};
pub use value::Value;

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for writing checks and hand-written `Inspect` impls.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::prelude::*;
///
/// fn non_empty(ctx: &Context<'_>) -> Result<(), CheckError> {
///     match ctx.value() {
///         Value::Str("") => Err(CheckError::too_short()),
///         _ => Ok(()),
///     }
/// }
///
/// let ctx = Context::new(Value::Str(""), "nonEmpty", "", "name", "name");
/// assert!(non_empty(&ctx).is_err());
/// ```
pub mod prelude {
    pub use super::{
        CheckError, Context, Describe, ErrorsMap, FieldDescriptor, Inspect, Shape, Value, keys,
    };
}

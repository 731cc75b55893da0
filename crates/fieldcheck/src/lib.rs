//! # fieldcheck
//!
//! Walks arbitrary records and runs the named checks declared on their
//! fields, collecting every failure into a report keyed by field path.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! #[derive(Describe)]
//! struct Signup {
//!     #[check(valid = "minLength 1, maxLength 200")]
//!     name: String,
//!     #[serde(rename = "pass")]
//!     #[check(valid = "password")]
//!     password: String,
//!     #[check(valid = "higherThan 18", optional)]
//!     age: Option<u8>,
//! }
//!
//! let checker = Checker::builder()
//!     .serial_names(SerialNames::default())
//!     .bundled_checks()
//!     .build();
//!
//! let errors = checker.check(&Signup {
//!     name: "Mario".into(),
//!     password: "Jump".into(),
//!     age: None,
//! });
//! assert_eq!(errors.to_string(), "pass: Value is too short");
//! ```
//!
//! ## Declaring rules
//!
//! Rules are a comma-separated list of `name [argument]` invocations. The
//! engine looks each name up in the checker's registry; unknown names are
//! reported as `NOT_DEFINED` at the field and the walk continues.
//!
//! ## Writing checks
//!
//! A check is any `Fn(&Context<'_>) -> Result<(), CheckError>`. It sees a
//! normalised [`Value`](foundation::Value) snapshot of the field and the raw
//! rule argument. See [`checks`] for the bundled ones.
//!
//! ## Shapes
//!
//! Anything implementing [`Inspect`] can be walked. Records implement
//! [`Describe`] as well, usually through `#[derive(Describe)]`; the standard
//! scalars, `Option`, smart pointers and ordered collections are covered
//! out of the box.

extern crate self as fieldcheck;

pub mod checks;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;

pub use engine::{Check, Checker, CheckerBuilder, Options, SerialNames};
pub use foundation::{CheckError, Context, Describe, ErrorsMap, Inspect};

/// Derives [`Describe`] and [`Inspect`] for a struct with named fields.
///
/// # Field attributes
///
/// - `#[check(valid = "minLength 1, maxLength 200")]`: rules to run.
/// - `#[check(optional)]` or `#[check(optional = "true")]`: skip the field
///   when its value is zero.
/// - `#[check(serial = "pass,omitempty")]`: alternate serialization name.
/// - `#[check(skip)]`: leave the field out entirely.
///
/// Without `serial`, the serde attributes `rename`, `skip` and
/// `skip_serializing` supply the alternate name.
#[cfg(feature = "derive")]
pub use fieldcheck_macros::Describe;

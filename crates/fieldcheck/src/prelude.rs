//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let checker = Checker::builder().bundled_checks().build();
//! assert!(checker.check(&None::<String>).is_empty());
//! ```

pub use crate::checks::bundled;
pub use crate::engine::{Check, Checker, CheckerBuilder, Options, SerialNames};
pub use crate::foundation::{
    CheckError, Context, Describe, ErrorsMap, FieldDescriptor, Inspect, Shape, Value, keys,
};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Describe;

//! Traversal engine: check registry, rule parsing, name resolution, and the
//! recursive walk that produces an [`ErrorsMap`](crate::foundation::ErrorsMap).
//!
//! # Walk order
//!
//! For every record field, in declaration order:
//!
//! 1. resolve the display name (the field may be skipped here);
//! 2. append it to the path;
//! 3. stop if the field is optional and its value is zero;
//! 4. run the field's rules, left to right;
//! 5. recurse into the value.
//!
//! Optional values recurse with the path unchanged when present. Sequence
//! elements recurse under their zero-based index.

mod checker;
pub mod naming;
mod options;
pub mod path;
pub mod registry;
pub mod rule;

pub use checker::{Checker, CheckerBuilder};
pub use options::{Options, SerialNames};
pub use registry::{Check, CheckRegistry};

//! Bundled checks
//!
//! Ready-made check functions for the common string and numeric rules. The
//! engine registers none of them by default; [`bundled`] returns them under
//! their conventional rule names for bulk registration.
//!
//! | Rule name    | Function                | Fails with                    |
//! |--------------|-------------------------|-------------------------------|
//! | `minLength`  | [`min_length`]          | `NOT_STRING`, `VAL_TO_SHORT`  |
//! | `maxLength`  | [`max_length`]          | `NOT_STRING`, `VAL_TO_LONG`   |
//! | `password`   | [`password`]            | `NOT_STRING`, `VAL_TO_SHORT`  |
//! | `higherThan` | [`higher_than`]         | `NOT_INT`, `VAL_TO_SMALL`     |
//! | `lowerThan`  | [`lower_than`]          | `NOT_INT`, `VAL_TO_BIG`       |
//!
//! Every check that takes an argument fails with `INVALID_ARG` when the
//! argument is missing or not an integer.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Checker, checks};
//!
//! let mut checker = Checker::new();
//! checker.add_checks(checks::bundled());
//! assert!(checker.has_check("minLength"));
//! assert!(checker.has_check("lowerThan"));
//! ```

pub mod length;
pub mod range;

pub use length::{PASSWORD_MIN_CHARS, max_length, min_length, password};
pub use range::{higher_than, lower_than};

use crate::engine::Check;

/// The bundled checks paired with their conventional rule names.
pub fn bundled() -> Vec<(&'static str, Check)> {
    vec![
        ("minLength", Check::new(min_length)),
        ("maxLength", Check::new(max_length)),
        ("password", Check::new(password)),
        ("higherThan", Check::new(higher_than)),
        ("lowerThan", Check::new(lower_than)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_names() {
        let names: Vec<_> = bundled().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["minLength", "maxLength", "password", "higherThan", "lowerThan"]
        );
    }
}

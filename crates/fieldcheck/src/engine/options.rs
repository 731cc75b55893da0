//! Checker configuration.
//!
//! Both types deserialize with every field defaulted, so a checker can be
//! configured from any serde source:
//!
//! ```
//! use fieldcheck::engine::{Options, SerialNames};
//!
//! let options: Options =
//!     serde_json::from_str(r#"{ "serial_names": { "ignore_skipped": true } }"#).unwrap();
//! assert_eq!(options.serial_names, Some(SerialNames { ignore_skipped: true }));
//!
//! let options: Options = serde_json::from_str("{}").unwrap();
//! assert_eq!(options, Options::default());
//! ```

use serde::{Deserialize, Serialize};

/// How a [`Checker`](super::Checker) names fields and walks records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// When set, paths use each field's alternate serialization name
    /// instead of its intrinsic name. `None` always uses intrinsic names.
    pub serial_names: Option<SerialNames>,
}

impl Options {
    /// Options that report fields under their serialization names.
    pub fn with_serial_names(serial_names: SerialNames) -> Self {
        Self {
            serial_names: Some(serial_names),
        }
    }
}

/// Name-resolution policy based on alternate serialization names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialNames {
    /// Skip fields whose serialization name is `-` (neither their rules nor
    /// their children are checked). When false such fields are reported
    /// under their intrinsic name.
    pub ignore_skipped: bool,
}

impl SerialNames {
    /// Policy that skips `-` fields.
    pub fn ignoring_skipped() -> Self {
        Self {
            ignore_skipped: true,
        }
    }
}

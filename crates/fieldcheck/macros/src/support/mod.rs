//! Internal support utilities for the derive.
//!
//! Attribute parsing, diagnostics, and small syn helpers shared by the
//! expansion code.

pub mod attrs;
pub mod diag;
pub mod serde;
pub mod utils;

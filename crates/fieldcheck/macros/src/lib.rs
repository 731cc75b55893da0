//! # fieldcheck-macros
//!
//! Derive macro for the `fieldcheck` crate. Use it through the re-export
//! `fieldcheck::Describe` rather than depending on this crate directly.
//!
//! ## Examples
//!
//! ```ignore
//! use fieldcheck::Describe;
//!
//! #[derive(Describe)]
//! pub struct Login {
//!     #[check(valid = "minLength 1, maxLength 200")]
//!     name: String,
//!
//!     #[serde(rename = "pass")]
//!     #[check(valid = "password")]
//!     password: String,
//!
//!     #[check(valid = "higherThan 18", optional)]
//!     age: Option<u8>,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod describe;
mod support;

/// Derives `Describe` and `Inspect` for a struct with named fields.
///
/// # Field attributes
///
/// - `#[check(valid = "...")]` - comma-separated rules, e.g. `"minLength 1, password"`
/// - `#[check(optional)]` / `#[check(optional = "true")]` - skip the field when its value is zero
/// - `#[check(serial = "...")]` - alternate serialization name, options after `,` are ignored
/// - `#[check(skip)]` - leave the field out of the description
///
/// Without `serial`, `#[serde(rename = "...")]` and
/// `#[serde(rename(serialize = "..."))]` supply the alternate name, and
/// `#[serde(skip)]` / `#[serde(skip_serializing)]` set it to `"-"`.
///
/// Every type parameter gets an `Inspect` bound.
#[proc_macro_derive(Describe, attributes(check, serde))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match describe::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => support::diag::to_compile_error(err),
    }
}

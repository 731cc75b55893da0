//! Reads the alternate serialization name from `#[serde(...)]` field
//! attributes.
//!
//! Only `rename = "..."`, `rename(serialize = "...")`, `skip` and
//! `skip_serializing` matter here; every other serde item is consumed and
//! ignored so the derive never rejects valid serde input.

use syn::{Attribute, Expr, LitStr, Result, Token, meta::ParseNestedMeta};

/// Serialization name marking a field as skipped.
const SKIP_MARKER: &str = "-";

/// Returns the serialization name serde would use for a field, `"-"` when
/// serde skips it, or `None` when serde leaves the name alone.
pub fn serial_name(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut rename = None;
    let mut skipped = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(name) = parse_rename(&meta)? {
                    rename = Some(name);
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                skipped = true;
            } else {
                consume(&meta)?;
            }
            Ok(())
        })?;
    }

    if skipped {
        return Ok(Some(SKIP_MARKER.to_owned()));
    }
    Ok(rename)
}

fn parse_rename(meta: &ParseNestedMeta<'_>) -> Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let name: LitStr = meta.value()?.parse()?;
        return Ok(Some(name.value()));
    }

    let mut serialize = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            let name: LitStr = inner.value()?.parse()?;
            serialize = Some(name.value());
        } else {
            consume(&inner)?;
        }
        Ok(())
    })?;
    Ok(serialize)
}

fn consume(meta: &ParseNestedMeta<'_>) -> Result<()> {
    if meta.input.peek(Token![=]) {
        let _: Expr = meta.value()?.parse()?;
    } else if !meta.input.is_empty() && !meta.input.peek(Token![,]) {
        let _: proc_macro2::TokenTree = meta.input.parse()?;
    }
    Ok(())
}

use syn::{
    Attribute, Ident, Lit, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed `#[check(...)]` arguments, merged across every such attribute on
/// an item.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `optional` or `skip`.
    Flag(Ident),
    /// Key-value pair like `valid = "minLength 1"`.
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    /// The item's key.
    pub fn key(&self) -> &Ident {
        match self {
            AttrItem::Flag(key) | AttrItem::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Finds an item by key.
    pub fn get(&self, key: &str) -> Option<&AttrItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Gets a string value by key, erroring if the key is used with
    /// anything other than a string literal.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(AttrItem::KeyValue {
                value: Lit::Str(s), ..
            }) => Ok(Some(s.value())),
            Some(AttrItem::KeyValue { value, .. }) => Err(diag::error_spanned(
                value,
                format!("`{key}` expects a string literal"),
            )),
            Some(AttrItem::Flag(flag)) => Err(diag::error_spanned(
                flag,
                format!("`{key}` expects a value: `{key} = \"...\"`"),
            )),
        }
    }

    /// Checks if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Rejects unknown and repeated keys.
    pub fn ensure_known(&self, known: &[&str]) -> Result<()> {
        for (i, item) in self.items.iter().enumerate() {
            let key = item.key();
            if !known.iter().any(|k| key == k) {
                return Err(diag::error_spanned(
                    key,
                    format!(
                        "unknown attribute `{key}`, expected one of: {}",
                        known.join(", ")
                    ),
                ));
            }
            if self.items[..i].iter().any(|earlier| earlier.key() == key) {
                return Err(diag::error_spanned(key, format!("duplicate attribute `{key}`")));
            }
        }
        Ok(())
    }
}

/// Parses an attribute like `#[check(...)]`. Returns `None` for attributes
/// with another path.
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs::default())),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] (not name-value)"),
        )),
    }
}

/// Parses every attribute named `name` and merges their items.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs::default();

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}

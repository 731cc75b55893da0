//! Expansion of `#[derive(Describe)]`.
//!
//! For a struct with named fields this generates:
//!
//! - `Describe::describe`, returning one `FieldDescriptor` per field (minus
//!   `#[check(skip)]` fields) in declaration order;
//! - `Inspect`, with the `Record` shape and the all-fields-zero test.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Field, Generics, Lit, parse_quote};

use crate::support::attrs::{self, AttrArgs, AttrItem};
use crate::support::{diag, serde, utils};

const ATTR: &str = "check";
const FIELD_KEYS: &[&str] = &["valid", "optional", "serial", "skip"];

/// Metadata declared on one field.
#[derive(Debug, Default, PartialEq, Eq)]
struct FieldAttrs {
    skip: bool,
    rules: Option<String>,
    optional: Option<String>,
    serial: Option<String>,
}

impl FieldAttrs {
    fn from_field(field: &Field) -> syn::Result<Self> {
        let args = attrs::parse_attrs(&field.attrs, ATTR)?;
        args.ensure_known(FIELD_KEYS)?;

        if args.has_flag("skip") {
            if args.items.len() > 1 {
                return Err(diag::error_spanned(
                    field,
                    "`skip` cannot be combined with other `check` attributes",
                ));
            }
            return Ok(Self {
                skip: true,
                ..Self::default()
            });
        }

        let serial = match args.get_string("serial")? {
            Some(serial) => Some(serial),
            None => serde::serial_name(&field.attrs)?,
        };

        Ok(Self {
            skip: false,
            rules: args.get_string("valid")?,
            optional: optional_marker(&args)?,
            serial,
        })
    }
}

/// `optional` as a flag means `"true"`; with a value the string is kept
/// verbatim (the engine compares it case-insensitively).
fn optional_marker(args: &AttrArgs) -> syn::Result<Option<String>> {
    match args.get("optional") {
        None => Ok(None),
        Some(AttrItem::Flag(_)) => Ok(Some("true".to_owned())),
        Some(AttrItem::KeyValue {
            value: Lit::Str(s), ..
        }) => Ok(Some(s.value())),
        Some(AttrItem::KeyValue {
            value: Lit::Bool(b), ..
        }) => Ok(Some(b.value.to_string())),
        Some(AttrItem::KeyValue { value, .. }) => Err(diag::error_spanned(
            value,
            "`optional` expects a flag, a bool, or a string literal",
        )),
    }
}

/// Adds an `Inspect` bound for every type parameter.
fn add_inspect_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::fieldcheck::foundation::Inspect));
    }
    generics
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = utils::require_named_fields(input)?;

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;
        if attrs.skip {
            continue;
        }

        let Some(ident) = &field.ident else {
            return Err(diag::error_spanned(field, "expected a named field"));
        };
        let field_name = ident.unraw().to_string();

        let rules = attrs.rules.map(|r| quote!(.with_rules(#r)));
        let optional = attrs.optional.map(|o| quote!(.with_optional(#o)));
        let serial = attrs.serial.map(|s| quote!(.with_serial_name(#s)));

        descriptors.push(quote! {
            ::fieldcheck::foundation::FieldDescriptor::new(#field_name, &self.#ident)
                #rules
                #optional
                #serial
        });
    }

    let generics = add_inspect_bounds(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fieldcheck::foundation::Describe for #name #ty_generics #where_clause {
            fn describe(&self) -> ::std::vec::Vec<::fieldcheck::foundation::FieldDescriptor<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::fieldcheck::foundation::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::fieldcheck::foundation::Shape<'_> {
                ::fieldcheck::foundation::Shape::Record(self)
            }

            fn snapshot(&self) -> ::fieldcheck::foundation::Value<'_> {
                ::fieldcheck::foundation::Value::Record
            }

            fn is_zero(&self) -> bool {
                ::fieldcheck::foundation::record_is_zero(self)
            }
        }
    })
}

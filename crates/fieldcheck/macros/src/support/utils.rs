use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields};

/// Returns the named fields of a struct. A unit struct has none.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Describe` can only be derived for structs",
            ));
        }
    };

    match fields {
        Fields::Named(named) => Ok(named.named.iter().collect()),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "`Describe` requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
    }
}

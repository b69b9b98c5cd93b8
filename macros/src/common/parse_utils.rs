//! `#[via(...)]` attribute parsing
//!
//! The same attribute name appears in two places:
//! - on a field: `#[via]` or `#[via(mut)]`
//! - on the struct: `#[via(layer, layer, ...)]`

use syn::{Attribute, Ident, Meta, Token, parse::ParseStream, punctuated::Punctuated};

pub const VIA_ATTR: &str = "via";

/// Which accessor a field provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    Read,
    Write,
}

pub fn is_via_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(VIA_ATTR)
}

// =============================================================================
// Field Attribute: `#[via]` / `#[via(mut)]`
// =============================================================================

pub fn parse_accessor_kind(attr: &Attribute) -> syn::Result<AccessorKind> {
    match &attr.meta {
        Meta::Path(_) => Ok(AccessorKind::Read),
        Meta::List(list) => list.parse_args_with(|input: ParseStream| {
            input.parse::<Token![mut]>()?;
            Ok(AccessorKind::Write)
        }),
        Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[via]` or `#[via(mut)]`",
        )),
    }
}

// =============================================================================
// Struct Attribute: `#[via(layer, ...)]`
// =============================================================================

/// Layer names from every struct-level `#[via(...)]`, in order.
pub fn parse_layer_names(attrs: &[Attribute]) -> syn::Result<Vec<Ident>> {
    let mut names = Vec::new();
    for attr in attrs.iter().filter(|attr| is_via_attr(attr)) {
        match &attr.meta {
            Meta::List(_) => {
                let list = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
                names.extend(list);
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected a layer list, e.g. `#[via(sequence, collection)]`",
                ));
            }
        }
    }
    Ok(names)
}

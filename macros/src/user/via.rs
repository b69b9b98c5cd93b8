//! `#[derive(Via)]`
//!
//! Expansion, for a host `H` whose `#[via]` field has type `F`:
//!
//! ```text
//! impl ReadVia for H   { type Inner = F; fn via(&self) -> &F }
//! impl WriteVia for H  { fn via_mut(&mut self) -> &mut F }      (#[via(mut)] only)
//! impl <Layer>Via for H where F: <base capability>, ... {}      (per layer, closed)
//! impl IntoIterator for &H / Index / IndexMut / Extend / FromIterator
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Fields, Index, Member, Type, WherePredicate, parse_quote, spanned::Spanned,
};

use crate::common::{
    AccessorKind, Layer, closure_bounds, is_via_attr, layer_closure, parse_accessor_kind,
    parse_layer_names,
};

pub fn expand_derive_via(input: DeriveInput) -> TokenStream2 {
    match derive_via(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// The field marked `#[via]`.
struct AccessorField<'a> {
    member: Member,
    ty: &'a Type,
    kind: AccessorKind,
}

fn derive_via(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Via can only be derived for structs",
            ));
        }
    };
    let accessor = find_accessor(input, fields)?;

    let mut requested = Vec::new();
    for name in parse_layer_names(&input.attrs)? {
        let layer = Layer::parse(&name)?;
        if layer.needs_write() && accessor.kind == AccessorKind::Read {
            return Err(syn::Error::new_spanned(
                &name,
                format!(
                    "layer `{}` needs a writable accessor; mark the field `#[via(mut)]`",
                    layer.name()
                ),
            ));
        }
        requested.push(layer);
    }
    let layers = layer_closure(requested);

    let mut tokens = accessor_impls(input, &accessor);
    for &layer in &layers {
        tokens.extend(layer_impl(input, accessor.ty, layer));
    }
    let claims = |layer: Layer| layers.contains(&layer);
    tokens.extend(std_trait_impls(input, accessor.ty, claims));
    Ok(tokens)
}

fn find_accessor<'a>(input: &DeriveInput, fields: &'a Fields) -> syn::Result<AccessorField<'a>> {
    let mut found: Option<AccessorField<'a>> = None;
    for (position, field) in fields.iter().enumerate() {
        let Some(attr) = field.attrs.iter().find(|attr| is_via_attr(attr)) else {
            continue;
        };
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one field can be marked `#[via]`",
            ));
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: position as u32,
                span: field.ty.span(),
            }),
        };
        found = Some(AccessorField {
            member,
            ty: &field.ty,
            kind: parse_accessor_kind(attr)?,
        });
    }
    found.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "Via requires one field marked `#[via]` or `#[via(mut)]`",
        )
    })
}

/// Predicates already on the struct, to be repeated on every impl.
fn existing_predicates(input: &DeriveInput) -> Vec<&WherePredicate> {
    input
        .generics
        .where_clause
        .as_ref()
        .map(|clause| clause.predicates.iter().collect())
        .unwrap_or_default()
}

// =============================================================================
// Accessors
// =============================================================================

fn accessor_impls(input: &DeriveInput, accessor: &AccessorField) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let inner = accessor.ty;
    let member = &accessor.member;

    let mut tokens = quote! {
        impl #impl_generics ::collection_via::ReadVia for #name #ty_generics #where_clause {
            type Inner = #inner;

            #[inline]
            fn via(&self) -> &#inner {
                &self.#member
            }
        }
    };
    if accessor.kind == AccessorKind::Write {
        tokens.extend(quote! {
            impl #impl_generics ::collection_via::WriteVia for #name #ty_generics #where_clause {
                #[inline]
                fn via_mut(&mut self) -> &mut #inner {
                    &mut self.#member
                }
            }
        });
    }
    tokens
}

// =============================================================================
// Layers
// =============================================================================

fn layer_impl(input: &DeriveInput, inner: &Type, layer: Layer) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let existing = existing_predicates(input);
    let trait_ident = layer.trait_ident();
    let bounds = closure_bounds(layer, inner);

    quote! {
        impl #impl_generics ::collection_via::#trait_ident for #name #ty_generics
        where
            #(#existing,)*
            #bounds
        {
        }
    }
}

// =============================================================================
// Std Traits
// =============================================================================

fn std_trait_impls(
    input: &DeriveInput,
    inner: &Type,
    claims: impl Fn(Layer) -> bool,
) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let existing = existing_predicates(input);
    let element = quote!(<#inner as ::collection_via::Sequence>::Element);
    let index = quote!(<#inner as ::collection_via::Collection>::Index);
    let mut tokens = TokenStream2::new();

    if claims(Layer::Sequence) {
        let mut generics = input.generics.clone();
        generics.params.insert(0, parse_quote!('__via));
        let (ref_impl_generics, _, _) = generics.split_for_impl();
        tokens.extend(quote! {
            impl #ref_impl_generics ::core::iter::IntoIterator for &'__via #name #ty_generics
            where
                #(#existing,)*
                #inner: ::collection_via::Sequence + '__via,
            {
                type Item = &'__via #element;
                type IntoIter = <#inner as ::collection_via::Sequence>::Iter<'__via>;

                #[inline]
                fn into_iter(self) -> Self::IntoIter {
                    ::collection_via::SequenceVia::iter(self)
                }
            }
        });
    }

    if claims(Layer::Collection) {
        let bounds = closure_bounds(Layer::Collection, inner);
        tokens.extend(quote! {
            impl #impl_generics ::core::ops::Index<#index> for #name #ty_generics
            where
                #(#existing,)*
                #bounds
            {
                type Output = #element;

                #[inline]
                fn index(&self, position: #index) -> &#element {
                    ::collection_via::CollectionVia::at(self, position)
                }
            }
        });
    }

    if claims(Layer::MutableCollection) {
        let bounds = closure_bounds(Layer::MutableCollection, inner);
        tokens.extend(quote! {
            impl #impl_generics ::core::ops::IndexMut<#index> for #name #ty_generics
            where
                #(#existing,)*
                #bounds
            {
                #[inline]
                fn index_mut(&mut self, position: #index) -> &mut #element {
                    ::collection_via::MutableCollectionVia::at_mut(self, position)
                }
            }
        });
    }

    if claims(Layer::RangeReplaceableCollection) {
        let bounds = closure_bounds(Layer::RangeReplaceableCollection, inner);
        tokens.extend(quote! {
            impl #impl_generics ::core::iter::Extend<#element> for #name #ty_generics
            where
                #(#existing,)*
                #bounds
            {
                fn extend<__I>(&mut self, elements: __I)
                where
                    __I: ::core::iter::IntoIterator<Item = #element>,
                {
                    ::collection_via::RangeReplaceableCollectionVia::append_all(self, elements)
                }
            }

            impl #impl_generics ::core::iter::FromIterator<#element> for #name #ty_generics
            where
                #(#existing,)*
                #bounds
            {
                fn from_iter<__I>(elements: __I) -> Self
                where
                    __I: ::core::iter::IntoIterator<Item = #element>,
                {
                    ::collection_via::RangeReplaceableCollectionVia::from_elements(elements)
                }
            }
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> String {
        expand_derive_via(input).to_string()
    }

    #[test]
    fn test_read_only_host() {
        let out = expand(parse_quote! {
            #[via(collection)]
            struct Readings {
                #[via]
                values: Vec<i32>,
            }
        });
        assert!(out.contains("ReadVia for Readings"));
        assert!(!out.contains("WriteVia for Readings"));
        assert!(out.contains("SequenceVia for Readings"));
        assert!(out.contains("CollectionVia for Readings"));
        assert!(!out.contains("IndexMut"));
    }

    #[test]
    fn test_tuple_struct_member() {
        let out = expand(parse_quote! {
            struct Stack<T>(u8, #[via(mut)] Vec<T>);
        });
        assert!(out.contains("& self . 1"));
        assert!(out.contains("& mut self . 1"));
    }

    #[test]
    fn test_writable_layer_needs_writable_field() {
        let out = expand(parse_quote! {
            #[via(mutable_collection)]
            struct Readings {
                #[via]
                values: Vec<i32>,
            }
        });
        assert!(out.contains("needs a writable accessor"));
    }

    #[test]
    fn test_accessor_count_errors() {
        let none = expand(parse_quote! {
            struct Empty {
                values: Vec<i32>,
            }
        });
        assert!(none.contains("requires one field"));

        let two = expand(parse_quote! {
            struct Twice {
                #[via]
                a: Vec<i32>,
                #[via]
                b: Vec<i32>,
            }
        });
        assert!(two.contains("only one field"));

        let not_struct = expand(parse_quote! {
            enum Choice {
                A,
            }
        });
        assert!(not_struct.contains("only be derived for structs"));
    }
}

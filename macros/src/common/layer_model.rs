//! The forwarding layers as the derive sees them.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type};

/// One forwarding layer, ordered from the bottom of the ladder up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Sequence,
    Collection,
    BidirectionalCollection,
    RandomAccessCollection,
    MutableCollection,
    RangeReplaceableCollection,
    Array,
    EquatableArray,
    ComparableArray,
}

impl Layer {
    pub const ALL: [Layer; 9] = [
        Layer::Sequence,
        Layer::Collection,
        Layer::BidirectionalCollection,
        Layer::RandomAccessCollection,
        Layer::MutableCollection,
        Layer::RangeReplaceableCollection,
        Layer::Array,
        Layer::EquatableArray,
        Layer::ComparableArray,
    ];

    /// Name used in `#[via(...)]`.
    pub fn name(self) -> &'static str {
        match self {
            Layer::Sequence => "sequence",
            Layer::Collection => "collection",
            Layer::BidirectionalCollection => "bidirectional_collection",
            Layer::RandomAccessCollection => "random_access_collection",
            Layer::MutableCollection => "mutable_collection",
            Layer::RangeReplaceableCollection => "range_replaceable_collection",
            Layer::Array => "array",
            Layer::EquatableArray => "equatable_array",
            Layer::ComparableArray => "comparable_array",
        }
    }

    pub fn parse(ident: &Ident) -> syn::Result<Self> {
        let name = ident.to_string();
        Self::ALL
            .into_iter()
            .find(|layer| layer.name() == name)
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    ident,
                    format!(
                        "unknown layer `{name}`; expected one of: {}",
                        Self::ALL.map(Layer::name).join(", ")
                    ),
                )
            })
    }

    /// The layer trait, e.g. `RandomAccessCollectionVia`.
    pub fn trait_ident(self) -> Ident {
        let camel: String = self
            .name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect();
        format_ident!("{}Via", camel)
    }

    /// Direct supertrait layers.
    pub fn supers(self) -> &'static [Layer] {
        match self {
            Layer::Sequence => &[],
            Layer::Collection => &[Layer::Sequence],
            Layer::BidirectionalCollection => &[Layer::Collection],
            Layer::RandomAccessCollection => &[Layer::BidirectionalCollection],
            Layer::MutableCollection => &[Layer::Collection],
            Layer::RangeReplaceableCollection => &[Layer::Collection],
            Layer::Array => &[
                Layer::RandomAccessCollection,
                Layer::MutableCollection,
                Layer::RangeReplaceableCollection,
            ],
            Layer::EquatableArray | Layer::ComparableArray => &[Layer::Array],
        }
    }

    /// Whether the layer relays through `WriteVia`.
    pub fn needs_write(self) -> bool {
        !matches!(
            self,
            Layer::Sequence
                | Layer::Collection
                | Layer::BidirectionalCollection
                | Layer::RandomAccessCollection
        )
    }

    /// `where` predicates this layer adds, each followed by a comma.
    pub fn bounds(self, inner: &Type) -> TokenStream {
        let krate = quote!(::collection_via);
        match self {
            Layer::Sequence => quote!(#inner: #krate::Sequence,),
            Layer::Collection => quote!(#inner: #krate::Collection,),
            Layer::BidirectionalCollection => quote!(#inner: #krate::BidirectionalCollection,),
            Layer::RandomAccessCollection => quote!(#inner: #krate::RandomAccessCollection,),
            Layer::MutableCollection => quote!(#inner: #krate::MutableCollection,),
            Layer::RangeReplaceableCollection => quote! {
                #inner: #krate::RangeReplaceableCollection,
                Self: ::core::default::Default,
            },
            Layer::Array => quote!(#inner: #krate::ContiguousArray,),
            Layer::EquatableArray => quote! {
                <#inner as #krate::Sequence>::Element: ::core::cmp::PartialEq,
            },
            Layer::ComparableArray => quote! {
                <#inner as #krate::Sequence>::Element: ::core::cmp::Ord,
            },
        }
    }
}

/// `layers` together with all of their supertrait layers.
pub fn layer_closure(layers: impl IntoIterator<Item = Layer>) -> BTreeSet<Layer> {
    let mut closed = BTreeSet::new();
    let mut pending: Vec<Layer> = layers.into_iter().collect();
    while let Some(layer) = pending.pop() {
        if closed.insert(layer) {
            pending.extend_from_slice(layer.supers());
        }
    }
    closed
}

/// Predicates for `layer` and everything beneath it.
pub fn closure_bounds(layer: Layer, inner: &Type) -> TokenStream {
    layer_closure([layer])
        .into_iter()
        .map(|layer| layer.bounds(inner))
        .collect()
}

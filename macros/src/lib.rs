//! Procedural macros for collection-via
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Via)]` | struct | Accessor impls plus the listed forwarding layers |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Default, Via)]
//! #[via(random_access_collection, range_replaceable_collection)]
//! struct Line {
//!     #[via(mut)]
//!     points: Vec<(i32, i32)>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derives
// =============================================================================

/// Derive an accessor and forwarding layers for a host struct.
///
/// # Field attribute
///
/// Exactly one field is the inner container:
/// - `#[via]` implements `ReadVia`.
/// - `#[via(mut)]` implements `ReadVia` and `WriteVia`.
///
/// # Struct attribute
///
/// `#[via(layer, ...)]` names forwarding layers by their `snake_case` name
/// without the `Via` suffix: `sequence`, `collection`,
/// `bidirectional_collection`, `random_access_collection`,
/// `mutable_collection`, `range_replaceable_collection`, `array`,
/// `equatable_array`, `comparable_array`.
///
/// Supertrait layers are added automatically. Every layer impl is bounded
/// on the field type satisfying the matching base capability.
///
/// Std traits follow the layers: `&Host: IntoIterator` with `sequence`,
/// `Index` with `collection`, `IndexMut` with `mutable_collection`,
/// `Extend` and `FromIterator` with `range_replaceable_collection`.
#[proc_macro_derive(Via, attributes(via))]
pub fn derive_via(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_via(input).into()
}

//! # Layer 0: Accessors
//!
//! An accessor is the declared path from a host value to the single inner
//! container it owns.
//!
//! - `ReadVia`: readable accessor, `&Host -> &Inner`.
//! - `WriteVia`: writable accessor, additionally `&mut Host -> &mut Inner`.
//! - `KeyPath` / `WritableKeyPath`: the same paths as first-class values.
//!
//! `WriteVia` refines `ReadVia`, so a writable accessor satisfies every
//! layer that only asks for a readable one. The reverse never type-checks.

pub mod key_path;

pub use key_path::{KeyPath, WritableKeyPath};

use crate::capability::{Collection, Sequence};

/// Readable accessor from a host to its inner container.
///
/// The accessor is total: every host value resolves to exactly one inner
/// container, and reading it has no side effects.
pub trait ReadVia {
    /// The container every forwarded operation is relayed to.
    type Inner: ?Sized;

    /// Borrow the inner container.
    fn via(&self) -> &Self::Inner;

    /// The accessor as a value.
    fn key_path() -> KeyPath<Self, Self::Inner>
    where
        Self: Sized,
    {
        KeyPath::new(Self::via)
    }
}

/// Writable accessor from a host to its inner container.
pub trait WriteVia: ReadVia {
    /// Mutably borrow the inner container.
    fn via_mut(&mut self) -> &mut Self::Inner;

    /// Replace the inner container in place, returning the previous one.
    fn replace_inner(&mut self, inner: Self::Inner) -> Self::Inner
    where
        Self::Inner: Sized,
    {
        core::mem::replace(self.via_mut(), inner)
    }

    /// The accessor as a value.
    fn writable_key_path() -> WritableKeyPath<Self, Self::Inner>
    where
        Self: Sized,
    {
        WritableKeyPath::new(Self::via, Self::via_mut)
    }
}

/// Element type of the container behind `H`'s accessor.
pub type ElementOf<H> = <<H as ReadVia>::Inner as Sequence>::Element;

/// Index type of the container behind `H`'s accessor.
pub type IndexOf<H> = <<H as ReadVia>::Inner as Collection>::Index;

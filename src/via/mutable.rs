//! In-place writes through the writable accessor.
//!
//! Reads stay on [`CollectionVia`]; the writes here land in the inner
//! container immediately, so the next read through the same host sees
//! them.
//!
//! Deriving a writable layer over a field marked plain `#[via]` is rejected:
//!
//! ```compile_fail
//! use collection_via::prelude::*;
//!
//! #[derive(Via)]
//! #[via(mutable_collection)]
//! struct Readings {
//!     #[via]
//!     values: Vec<i32>,
//! }
//! ```

use core::ops::Range;

use super::CollectionVia;
use crate::accessor::{ElementOf, IndexOf, WriteVia};
use crate::capability::MutableCollection;

pub trait MutableCollectionVia: CollectionVia + WriteVia<Inner: MutableCollection> {
    #[inline]
    fn at_mut(&mut self, position: IndexOf<Self>) -> &mut ElementOf<Self> {
        self.via_mut().at_mut(position)
    }

    #[inline]
    fn swap_at(&mut self, i: IndexOf<Self>, j: IndexOf<Self>) {
        self.via_mut().swap_at(i, j)
    }

    /// Returns the element that was replaced.
    #[inline]
    fn set(&mut self, position: IndexOf<Self>, value: ElementOf<Self>) -> ElementOf<Self> {
        self.via_mut().set(position, value)
    }

    #[inline]
    fn assign_range<I>(&mut self, bounds: Range<IndexOf<Self>>, values: I)
    where
        I: IntoIterator<Item = ElementOf<Self>>,
    {
        self.via_mut().assign_range(bounds, values)
    }

    #[inline]
    fn with_contiguous_storage_mut<R, F>(&mut self, body: F) -> Option<R>
    where
        F: FnOnce(&mut [ElementOf<Self>]) -> R,
    {
        self.via_mut().with_contiguous_storage_mut(body)
    }
}

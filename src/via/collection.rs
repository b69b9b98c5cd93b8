//! Indexed access and forward index arithmetic through the accessor.
//!
//! Indices are the inner container's own. Nothing here checks them: an
//! invalid index faults exactly where the inner container would fault.

use core::ops::Range;

use super::SequenceVia;
use crate::accessor::{ElementOf, IndexOf, ReadVia};
use crate::capability::{Collection, Indices};

/// Multi-pass, indexed access to the inner container.
pub trait CollectionVia: SequenceVia + ReadVia<Inner: Collection> {
    #[inline]
    fn start_index(&self) -> IndexOf<Self> {
        self.via().start_index()
    }

    #[inline]
    fn end_index(&self) -> IndexOf<Self> {
        self.via().end_index()
    }

    #[inline]
    fn index_after(&self, i: IndexOf<Self>) -> IndexOf<Self> {
        self.via().index_after(i)
    }

    #[inline]
    fn form_index_after(&self, i: &mut IndexOf<Self>) {
        self.via().form_index_after(i)
    }

    #[inline]
    fn at(&self, position: IndexOf<Self>) -> &ElementOf<Self> {
        self.via().at(position)
    }

    #[inline]
    fn slice(&self, bounds: Range<IndexOf<Self>>) -> <Self::Inner as Collection>::SubSequence<'_> {
        self.via().slice(bounds)
    }

    #[inline]
    fn indices(&self) -> Indices<'_, Self::Inner> {
        self.via().indices()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.via().is_empty()
    }

    #[inline]
    fn count(&self) -> usize {
        self.via().count()
    }

    #[inline]
    fn first(&self) -> Option<&ElementOf<Self>> {
        self.via().first()
    }

    #[inline]
    fn index_offset(&self, i: IndexOf<Self>, distance: isize) -> IndexOf<Self> {
        self.via().index_offset(i, distance)
    }

    #[inline]
    fn form_index_offset(&self, i: &mut IndexOf<Self>, distance: isize) {
        self.via().form_index_offset(i, distance)
    }

    /// `None` when `limit` is passed before `distance` steps complete.
    #[inline]
    fn index_offset_limited(
        &self,
        i: IndexOf<Self>,
        distance: isize,
        limit: IndexOf<Self>,
    ) -> Option<IndexOf<Self>> {
        self.via().index_offset_limited(i, distance, limit)
    }

    #[inline]
    fn form_index_offset_limited(
        &self,
        i: &mut IndexOf<Self>,
        distance: isize,
        limit: IndexOf<Self>,
    ) -> bool {
        self.via().form_index_offset_limited(i, distance, limit)
    }

    #[inline]
    fn distance(&self, start: IndexOf<Self>, end: IndexOf<Self>) -> isize {
        self.via().distance(start, end)
    }
}

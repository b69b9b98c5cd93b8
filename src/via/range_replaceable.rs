//! Subrange replacement through the writable accessor.
//!
//! Each mutator is handed to the inner container's mutator of the same
//! name. On the inner side they are all compositions of
//! `replace_subrange`, so the host gets the same contents it would get
//! by calling `replace_subrange` itself.

use alloc::vec::Vec;
use core::ops::Range;

use super::CollectionVia;
use crate::accessor::{ElementOf, IndexOf, WriteVia};
use crate::capability::{BidirectionalCollection, RangeReplaceableCollection};

/// Arbitrary insertion and removal, plus empty construction.
///
/// The host supplies `Default`, which must produce a host around an empty
/// inner container.
pub trait RangeReplaceableCollectionVia:
    CollectionVia + WriteVia<Inner: RangeReplaceableCollection> + Default
{
    /// A host holding `elements`, built by appending to an empty host.
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = ElementOf<Self>>,
    {
        let mut host = Self::default();
        host.append_all(elements);
        host
    }

    /// A host holding `count` copies of `element`.
    fn repeating(element: ElementOf<Self>, count: usize) -> Self
    where
        ElementOf<Self>: Clone,
    {
        Self::from_elements(core::iter::repeat_n(element, count))
    }

    /// Returns the removed elements.
    #[inline]
    fn replace_subrange<I>(
        &mut self,
        bounds: Range<IndexOf<Self>>,
        new_elements: I,
    ) -> Vec<ElementOf<Self>>
    where
        I: IntoIterator<Item = ElementOf<Self>>,
    {
        self.via_mut().replace_subrange(bounds, new_elements)
    }

    #[inline]
    fn reserve_capacity(&mut self, minimum_capacity: usize) {
        self.via_mut().reserve_capacity(minimum_capacity)
    }

    #[inline]
    fn push(&mut self, element: ElementOf<Self>) {
        self.via_mut().push(element)
    }

    #[inline]
    fn append_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = ElementOf<Self>>,
    {
        self.via_mut().append_all(elements)
    }

    #[inline]
    fn insert(&mut self, i: IndexOf<Self>, element: ElementOf<Self>) {
        self.via_mut().insert(i, element)
    }

    #[inline]
    fn insert_all<I>(&mut self, i: IndexOf<Self>, elements: I)
    where
        I: IntoIterator<Item = ElementOf<Self>>,
    {
        self.via_mut().insert_all(i, elements)
    }

    #[inline]
    fn remove(&mut self, i: IndexOf<Self>) -> ElementOf<Self> {
        self.via_mut().remove(i)
    }

    #[inline]
    fn remove_range(&mut self, bounds: Range<IndexOf<Self>>) {
        self.via_mut().remove_range(bounds)
    }

    #[inline]
    fn remove_first(&mut self) -> ElementOf<Self> {
        self.via_mut().remove_first()
    }

    #[inline]
    fn remove_first_n(&mut self, k: usize) {
        self.via_mut().remove_first_n(k)
    }

    #[inline]
    fn remove_last(&mut self) -> ElementOf<Self>
    where
        Self::Inner: BidirectionalCollection,
    {
        self.via_mut().remove_last()
    }

    #[inline]
    fn remove_last_n(&mut self, k: usize)
    where
        Self::Inner: BidirectionalCollection,
    {
        self.via_mut().remove_last_n(k)
    }

    #[inline]
    fn pop_last(&mut self) -> Option<ElementOf<Self>>
    where
        Self::Inner: BidirectionalCollection,
    {
        self.via_mut().pop_last()
    }

    #[inline]
    fn remove_all(&mut self, keeping_capacity: bool) {
        self.via_mut().remove_all(keeping_capacity)
    }

    #[inline]
    fn remove_all_where<F>(&mut self, should_remove: F)
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via_mut().remove_all_where(should_remove)
    }
}

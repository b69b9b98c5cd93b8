//! Contiguous, integer-indexed storage.

use alloc::vec::Vec;

use super::{MutableCollection, RandomAccessCollection, RangeReplaceableCollection};
use crate::difference::CollectionDifference;

/// A random-access, mutable, range-replaceable collection backed by one
/// contiguous buffer and indexed by `usize` positions starting at zero.
pub trait ContiguousArray:
    RandomAccessCollection<Index = usize> + MutableCollection + RangeReplaceableCollection
{
    fn as_slice(&self) -> &[Self::Element];

    fn as_mut_slice(&mut self) -> &mut [Self::Element];

    /// Elements the buffer can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Changes that turn `other` into `self`, comparing with `equivalent`.
    fn difference_by<F>(
        &self,
        other: &[Self::Element],
        equivalent: F,
    ) -> CollectionDifference<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element, &Self::Element) -> bool,
    {
        CollectionDifference::between(other, self.as_slice(), equivalent)
    }

    /// `self` with `difference` applied, or `None` if the difference does
    /// not fit these elements.
    fn applying(
        &self,
        difference: &CollectionDifference<Self::Element>,
    ) -> Option<Vec<Self::Element>>
    where
        Self::Element: Clone,
    {
        difference.apply_to(self.as_slice())
    }
}

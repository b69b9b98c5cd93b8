//! # Array Layer
//!
//! Conveniences over contiguous, `usize`-indexed storage. Each one borrows
//! the inner buffer as a slice and hands the work to the slice (or to
//! `rand` for the random ones); none of them keep state of their own.
//!
//! Groups:
//! - inspection: `capacity`, `random_element`
//! - search: `contains_where`, `first_where`, `last_index_where`, `min_by`, ...
//! - selection: `prefix*`, `suffix*`, `drop_*`
//! - transformation: `map`, `flat_map`, `compact_map`, `reduce`, `lazy_map`, ...
//! - reordering: `sort_by`, `reverse`, `shuffle`, `partition`
//! - splitting: `split_where`, `splitn_where`
//! - comparison and diffing: `difference_by`, `elements_equal_by`, ...
//!
//! Operations that need `PartialEq` or `Ord` elements live on the
//! [`EquatableArrayVia`] and [`ComparableArrayVia`] refinements.

mod refinements;

pub use refinements::{ComparableArrayVia, EquatableArrayVia};

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::{Enumerate, Map, Rev};
use core::slice;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{MutableCollectionVia, RandomAccessCollectionVia, RangeReplaceableCollectionVia};
use crate::accessor::{ElementOf, WriteVia};
use crate::capability::ContiguousArray;
use crate::difference::CollectionDifference;

/// A host over a [`ContiguousArray`].
pub trait ArrayVia:
    RandomAccessCollectionVia
    + MutableCollectionVia
    + RangeReplaceableCollectionVia
    + WriteVia<Inner: ContiguousArray>
{
    // =========================================================================
    // Inspection
    // =========================================================================

    #[inline]
    fn capacity(&self) -> usize {
        self.via().capacity()
    }

    /// A uniformly chosen element, or `None` when empty.
    fn random_element<R>(&self, rng: &mut R) -> Option<&ElementOf<Self>>
    where
        R: Rng + ?Sized,
    {
        self.via().as_slice().choose(rng)
    }

    // =========================================================================
    // Search
    // =========================================================================

    fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via().as_slice().iter().any(predicate)
    }

    fn all_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via().as_slice().iter().all(predicate)
    }

    fn first_where<F>(&self, mut predicate: F) -> Option<&ElementOf<Self>>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via()
            .as_slice()
            .iter()
            .find(|element| predicate(element))
    }

    fn first_index_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via().as_slice().iter().position(predicate)
    }

    fn last_where<F>(&self, mut predicate: F) -> Option<&ElementOf<Self>>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via()
            .as_slice()
            .iter()
            .rev()
            .find(|element| predicate(element))
    }

    fn last_index_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via().as_slice().iter().rposition(predicate)
    }

    /// The least element under `compare`; the first of several equal ones.
    fn min_by<F>(&self, mut compare: F) -> Option<&ElementOf<Self>>
    where
        F: FnMut(&ElementOf<Self>, &ElementOf<Self>) -> Ordering,
    {
        self.via().as_slice().iter().min_by(|a, b| compare(a, b))
    }

    /// The greatest element under `compare`; the first of several equal ones.
    fn max_by<F>(&self, mut compare: F) -> Option<&ElementOf<Self>>
    where
        F: FnMut(&ElementOf<Self>, &ElementOf<Self>) -> Ordering,
    {
        self.via().as_slice().iter().reduce(|best, element| {
            match compare(element, best) {
                Ordering::Greater => element,
                _ => best,
            }
        })
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Up to `max_length` leading elements.
    fn prefix(&self, max_length: usize) -> &[ElementOf<Self>] {
        let elements = self.via().as_slice();
        &elements[..max_length.min(elements.len())]
    }

    /// Elements up to and including position `end`.
    fn prefix_through(&self, end: usize) -> &[ElementOf<Self>] {
        &self.via().as_slice()[..=end]
    }

    /// Elements before position `end`.
    fn prefix_up_to(&self, end: usize) -> &[ElementOf<Self>] {
        &self.via().as_slice()[..end]
    }

    fn prefix_while<F>(&self, mut predicate: F) -> &[ElementOf<Self>]
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        let elements = self.via().as_slice();
        let end = elements
            .iter()
            .position(|element| !predicate(element))
            .unwrap_or(elements.len());
        &elements[..end]
    }

    /// Up to `max_length` trailing elements.
    fn suffix(&self, max_length: usize) -> &[ElementOf<Self>] {
        let elements = self.via().as_slice();
        &elements[elements.len() - max_length.min(elements.len())..]
    }

    /// Elements from position `start` on.
    fn suffix_from(&self, start: usize) -> &[ElementOf<Self>] {
        &self.via().as_slice()[start..]
    }

    fn drop_first(&self, k: usize) -> &[ElementOf<Self>] {
        let elements = self.via().as_slice();
        &elements[k.min(elements.len())..]
    }

    fn drop_last(&self, k: usize) -> &[ElementOf<Self>] {
        let elements = self.via().as_slice();
        &elements[..elements.len() - k.min(elements.len())]
    }

    fn drop_while<F>(&self, mut predicate: F) -> &[ElementOf<Self>]
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        let elements = self.via().as_slice();
        let start = elements
            .iter()
            .position(|element| !predicate(element))
            .unwrap_or(elements.len());
        &elements[start..]
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&ElementOf<Self>) -> U,
    {
        self.via().as_slice().iter().map(transform).collect()
    }

    fn flat_map<I, F>(&self, transform: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&ElementOf<Self>) -> I,
    {
        self.via().as_slice().iter().flat_map(transform).collect()
    }

    /// `map`, dropping the `None` results.
    fn compact_map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&ElementOf<Self>) -> Option<U>,
    {
        self.via().as_slice().iter().filter_map(transform).collect()
    }

    fn reduce<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &ElementOf<Self>) -> A,
    {
        self.via().as_slice().iter().fold(initial, combine)
    }

    /// `reduce` with an accumulator updated in place.
    fn reduce_into<A, F>(&self, initial: A, mut update: F) -> A
    where
        F: FnMut(&mut A, &ElementOf<Self>),
    {
        let mut accumulator = initial;
        for element in self.via().as_slice() {
            update(&mut accumulator, element);
        }
        accumulator
    }

    /// `map` that runs `transform` only as the result is iterated.
    fn lazy_map<U, F>(&self, transform: F) -> Map<slice::Iter<'_, ElementOf<Self>>, F>
    where
        F: FnMut(&ElementOf<Self>) -> U,
    {
        self.via().as_slice().iter().map(transform)
    }

    fn for_each<F>(&self, body: F)
    where
        F: FnMut(&ElementOf<Self>),
    {
        self.via().as_slice().iter().for_each(body)
    }

    /// `(offset, element)` pairs.
    fn enumerated(&self) -> Enumerate<slice::Iter<'_, ElementOf<Self>>> {
        self.via().as_slice().iter().enumerate()
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    /// Stable sort under `compare`.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&ElementOf<Self>, &ElementOf<Self>) -> Ordering,
    {
        self.via_mut().as_mut_slice().sort_by(compare)
    }

    fn reverse(&mut self) {
        self.via_mut().as_mut_slice().reverse()
    }

    /// The elements back to front, without moving them.
    fn reversed(&self) -> Rev<slice::Iter<'_, ElementOf<Self>>> {
        self.via().as_slice().iter().rev()
    }

    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.via_mut().as_mut_slice().shuffle(rng)
    }

    /// Move every element matching `belongs_in_second` after every element
    /// that doesn't, returning the position of the first match. Relative
    /// order within each group is not kept.
    fn partition<F>(&mut self, mut belongs_in_second: F) -> usize
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        let elements = self.via_mut().as_mut_slice();
        let mut pivot = 0;
        for i in 0..elements.len() {
            if !belongs_in_second(&elements[i]) {
                elements.swap(pivot, i);
                pivot += 1;
            }
        }
        pivot
    }

    // =========================================================================
    // Splitting
    // =========================================================================

    /// Runs between elements matching `is_separator`. Empty runs are kept.
    fn split_where<F>(&self, is_separator: F) -> Vec<&[ElementOf<Self>]>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via().as_slice().split(is_separator).collect()
    }

    /// Runs between elements matching `is_separator`, without the empty ones.
    fn split_nonempty_where<F>(&self, is_separator: F) -> Vec<&[ElementOf<Self>]>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via()
            .as_slice()
            .split(is_separator)
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// At most `n` runs; the last one holds the unsplit remainder.
    fn splitn_where<F>(&self, n: usize, is_separator: F) -> Vec<&[ElementOf<Self>]>
    where
        F: FnMut(&ElementOf<Self>) -> bool,
    {
        self.via().as_slice().splitn(n, is_separator).collect()
    }

    // =========================================================================
    // Comparison and diffing
    // =========================================================================

    /// Changes that turn `other` into these elements.
    fn difference_by<F>(
        &self,
        other: &[ElementOf<Self>],
        equivalent: F,
    ) -> CollectionDifference<ElementOf<Self>>
    where
        ElementOf<Self>: Clone,
        F: FnMut(&ElementOf<Self>, &ElementOf<Self>) -> bool,
    {
        self.via().difference_by(other, equivalent)
    }

    /// These elements with `difference` applied, or `None` if it does not
    /// fit them.
    fn applying(
        &self,
        difference: &CollectionDifference<ElementOf<Self>>,
    ) -> Option<Vec<ElementOf<Self>>>
    where
        ElementOf<Self>: Clone,
    {
        self.via().applying(difference)
    }

    fn elements_equal_by<I, F>(&self, other: I, mut equivalent: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(&ElementOf<Self>, I::Item) -> bool,
    {
        let mut other = other.into_iter();
        for element in self.via().as_slice() {
            match other.next() {
                Some(candidate) => {
                    if !equivalent(element, candidate) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        other.next().is_none()
    }

    fn starts_with_by<I, F>(&self, prefix: I, mut equivalent: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(&ElementOf<Self>, I::Item) -> bool,
    {
        let mut elements = self.via().as_slice().iter();
        for candidate in prefix {
            let Some(element) = elements.next() else {
                return false;
            };
            if !equivalent(element, candidate) {
                return false;
            }
        }
        true
    }

    /// Whether these elements order strictly before `other`, comparing
    /// element-wise with `compare` and then by length.
    fn lexicographically_precedes_by<F>(&self, other: &[ElementOf<Self>], mut compare: F) -> bool
    where
        F: FnMut(&ElementOf<Self>, &ElementOf<Self>) -> Ordering,
    {
        let elements = self.via().as_slice();
        for (a, b) in elements.iter().zip(other) {
            match compare(a, b) {
                Ordering::Equal => {}
                ordering => return ordering == Ordering::Less,
            }
        }
        elements.len() < other.len()
    }

    // =========================================================================
    // Storage
    // =========================================================================

    #[inline]
    fn with_buffer<R, F>(&self, body: F) -> R
    where
        F: FnOnce(&[ElementOf<Self>]) -> R,
    {
        body(self.via().as_slice())
    }

    #[inline]
    fn with_buffer_mut<R, F>(&mut self, body: F) -> R
    where
        F: FnOnce(&mut [ElementOf<Self>]) -> R,
    {
        body(self.via_mut().as_mut_slice())
    }
}

//! Subrange replacement and everything derived from it.
//!
//! `replace_subrange` is the one primitive. Every other mutator below is a
//! composition of it with index queries:
//!
//! ```text
//! insert(i, e)      == replace_subrange(i..i,     [e])
//! remove(i)         == replace_subrange(i..i + 1, [])
//! push(e)           == replace_subrange(end..end, [e])
//! remove_range(r)   == replace_subrange(r,        [])
//! ```
//!
//! Containers may override a derived mutator with a native call as long as
//! the resulting contents are the same.

use alloc::vec::Vec;
use core::iter;
use core::ops::Range;

use super::{BidirectionalCollection, Collection};

/// A collection that supports replacing any subrange with any number of
/// elements, and that can be created empty.
pub trait RangeReplaceableCollection: Collection + Default {
    /// Replace the elements in `bounds` with `new_elements`, returning the
    /// removed elements in order.
    ///
    /// An empty `bounds` inserts; an empty `new_elements` removes.
    fn replace_subrange<I>(
        &mut self,
        bounds: Range<Self::Index>,
        new_elements: I,
    ) -> Vec<Self::Element>
    where
        I: IntoIterator<Item = Self::Element>;

    /// Prepare for at least `minimum_capacity` elements.
    fn reserve_capacity(&mut self, minimum_capacity: usize) {
        let _ = minimum_capacity;
    }

    fn push(&mut self, element: Self::Element) {
        let end = self.end_index();
        self.replace_subrange(end.clone()..end, iter::once(element));
    }

    fn append_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let end = self.end_index();
        self.replace_subrange(end.clone()..end, elements);
    }

    fn insert(&mut self, i: Self::Index, element: Self::Element) {
        self.replace_subrange(i.clone()..i, iter::once(element));
    }

    fn insert_all<I>(&mut self, i: Self::Index, elements: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        self.replace_subrange(i.clone()..i, elements);
    }

    fn remove(&mut self, i: Self::Index) -> Self::Element {
        assert!(!self.is_empty(), "Can't remove from an empty collection");
        let next = self.index_after(i.clone());
        let mut removed = self.replace_subrange(i..next, iter::empty());
        match removed.pop() {
            Some(element) => element,
            None => unreachable!("a one-position range removes one element"),
        }
    }

    fn remove_range(&mut self, bounds: Range<Self::Index>) {
        self.replace_subrange(bounds, iter::empty());
    }

    fn remove_first(&mut self) -> Self::Element {
        assert!(
            !self.is_empty(),
            "Can't remove first element from an empty collection"
        );
        self.remove(self.start_index())
    }

    fn remove_first_n(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        assert!(
            k <= self.count(),
            "Can't remove more items from a collection than it has"
        );
        let start = self.start_index();
        let end = self.index_offset(start.clone(), k as isize);
        self.remove_range(start..end);
    }

    fn remove_last(&mut self) -> Self::Element
    where
        Self: BidirectionalCollection,
    {
        assert!(
            !self.is_empty(),
            "Can't remove last element from an empty collection"
        );
        let last = self.index_before(self.end_index());
        self.remove(last)
    }

    fn remove_last_n(&mut self, k: usize)
    where
        Self: BidirectionalCollection,
    {
        if k == 0 {
            return;
        }
        assert!(
            k <= self.count(),
            "Can't remove more items from a collection than it has"
        );
        let end = self.end_index();
        let start = self.index_offset(end.clone(), -(k as isize));
        self.remove_range(start..end);
    }

    fn pop_last(&mut self) -> Option<Self::Element>
    where
        Self: BidirectionalCollection,
    {
        if self.is_empty() {
            None
        } else {
            Some(self.remove_last())
        }
    }

    /// Remove every element. Without `keeping_capacity` the container is
    /// replaced by a freshly constructed empty one.
    fn remove_all(&mut self, keeping_capacity: bool) {
        if keeping_capacity {
            let (start, end) = (self.start_index(), self.end_index());
            self.replace_subrange(start..end, iter::empty());
        } else {
            *self = Self::default();
        }
    }

    /// Remove every element for which `should_remove` returns `true`,
    /// keeping the others in order.
    fn remove_all_where<F>(&mut self, mut should_remove: F)
    where
        F: FnMut(&Self::Element) -> bool,
    {
        let (start, end) = (self.start_index(), self.end_index());
        let all = self.replace_subrange(start..end, iter::empty());
        self.append_all(all.into_iter().filter(|element| !should_remove(element)));
    }
}

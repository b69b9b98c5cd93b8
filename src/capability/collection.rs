//! Multi-pass, indexed traversal.
//!
//! The provided index arithmetic walks one step at a time and rejects
//! backward movement. Bidirectional and random-access containers replace it
//! with the helpers in [`super::bidirectional`] or with O(1) arithmetic.

use core::fmt;
use core::ops::Range;

use super::Sequence;

/// A sequence with a stable index space.
pub trait Collection: Sequence {
    type Index: Clone + Eq + PartialOrd + fmt::Debug;

    type SubSequence<'a>
    where
        Self: 'a;

    /// Position of the first element, or `end_index()` when empty.
    fn start_index(&self) -> Self::Index;

    /// The "past the end" position.
    fn end_index(&self) -> Self::Index;

    /// Position immediately after `i`. `i` must be less than `end_index()`.
    fn index_after(&self, i: Self::Index) -> Self::Index;

    /// Element at `position`.
    fn at(&self, position: Self::Index) -> &Self::Element;

    /// Contiguous subrange of the elements.
    fn slice(&self, bounds: Range<Self::Index>) -> Self::SubSequence<'_>;

    fn form_index_after(&self, i: &mut Self::Index) {
        *i = self.index_after(i.clone());
    }

    /// Valid subscript positions, in ascending order.
    fn indices(&self) -> Indices<'_, Self> {
        Indices::new(self)
    }

    fn is_empty(&self) -> bool {
        self.start_index() == self.end_index()
    }

    fn count(&self) -> usize {
        self.distance(self.start_index(), self.end_index()) as usize
    }

    fn first(&self) -> Option<&Self::Element> {
        if self.is_empty() {
            None
        } else {
            Some(self.at(self.start_index()))
        }
    }

    /// Position `distance` steps away from `i`.
    fn index_offset(&self, i: Self::Index, distance: isize) -> Self::Index {
        assert!(
            distance >= 0,
            "Only bidirectional collections can be advanced by a negative amount"
        );
        let mut i = i;
        for _ in 0..distance {
            self.form_index_after(&mut i);
        }
        i
    }

    fn form_index_offset(&self, i: &mut Self::Index, distance: isize) {
        *i = self.index_offset(i.clone(), distance);
    }

    /// Position `distance` steps away from `i`, unless `limit` is passed
    /// first, in which case `None`.
    fn index_offset_limited(
        &self,
        i: Self::Index,
        distance: isize,
        limit: Self::Index,
    ) -> Option<Self::Index> {
        assert!(
            distance >= 0,
            "Only bidirectional collections can be advanced by a negative amount"
        );
        let mut i = i;
        for _ in 0..distance {
            if i == limit {
                return None;
            }
            self.form_index_after(&mut i);
        }
        Some(i)
    }

    /// Offset `i` in place. On `None` from [`Self::index_offset_limited`],
    /// `i` becomes `limit` and the result is `false`.
    fn form_index_offset_limited(
        &self,
        i: &mut Self::Index,
        distance: isize,
        limit: Self::Index,
    ) -> bool {
        match self.index_offset_limited(i.clone(), distance, limit.clone()) {
            Some(next) => {
                *i = next;
                true
            }
            None => {
                *i = limit;
                false
            }
        }
    }

    /// Number of steps from `start` to `end`.
    fn distance(&self, start: Self::Index, end: Self::Index) -> isize {
        assert!(
            start <= end,
            "Only bidirectional collections can have end come before start"
        );
        let mut start = start;
        let mut count = 0;
        while start != end {
            count += 1;
            self.form_index_after(&mut start);
        }
        count
    }
}

// =============================================================================
// Indices
// =============================================================================

/// Iterator over the valid positions of a collection.
pub struct Indices<'a, C: Collection + ?Sized> {
    base: &'a C,
    front: C::Index,
    back: C::Index,
}

impl<'a, C: Collection + ?Sized> Indices<'a, C> {
    fn new(base: &'a C) -> Self {
        Self {
            base,
            front: base.start_index(),
            back: base.end_index(),
        }
    }
}

impl<C: Collection + ?Sized> Clone for Indices<'_, C> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<C: Collection + ?Sized> fmt::Debug for Indices<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indices")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<C: Collection + ?Sized> Iterator for Indices<'_, C> {
    type Item = C::Index;

    fn next(&mut self) -> Option<C::Index> {
        if self.front == self.back {
            return None;
        }
        let current = self.front.clone();
        self.base.form_index_after(&mut self.front);
        Some(current)
    }
}

impl<C: super::BidirectionalCollection + ?Sized> DoubleEndedIterator for Indices<'_, C> {
    fn next_back(&mut self) -> Option<C::Index> {
        if self.front == self.back {
            return None;
        }
        self.base.form_index_before(&mut self.back);
        Some(self.back.clone())
    }
}
